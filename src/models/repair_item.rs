use crate::utils::money::parse_amount;

/// One description/cost pair from a repair entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairItem {
    pub description: String,
    pub cost: Option<i64>,
}

impl RepairItem {
    pub fn new(description: &str, cost: Option<i64>) -> Self {
        Self {
            description: description.trim().to_string(),
            cost,
        }
    }

    /// Parse a CLI item of the form "DESCRIPTION[:COST]".
    ///
    /// The cost part is taken from the last colon, and only when it parses
    /// as an amount; otherwise the whole string is the description. So
    /// "Oil change:50000" and "Oil change:50,000" carry a cost, while
    /// "Note: check brakes" stays one description.
    pub fn parse(s: &str) -> Self {
        if let Some((head, tail)) = s.rsplit_once(':')
            && let Ok(cost) = parse_amount(tail)
        {
            return Self::new(head, cost);
        }
        Self::new(s, None)
    }

    /// Blank items carry no description and no positive cost.
    pub fn is_blank(&self) -> bool {
        self.description.is_empty() && self.cost.unwrap_or(0) == 0
    }

    pub fn raw_cost(&self) -> i64 {
        self.cost.unwrap_or(0)
    }
}
