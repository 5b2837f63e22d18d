use fleetrepair::core::groups::build_groups;
use fleetrepair::store::sheet::{Cell, Grid};

fn text(s: &str) -> Cell {
    Cell::text(s)
}

fn num(n: i64) -> Cell {
    Cell::number(n)
}

fn e() -> Cell {
    Cell::Empty
}

#[test]
fn test_groups_follow_structure_not_row_position() {
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
        vec![e(), e(), e(), e(), text("Brake pads"), num(30000)],
        vec![e(), e(), e(), e(), text("Total Cost (ugx)"), num(80000)],
        vec![num(2), text("Masindi"), text("UEJ447X"), text("03-May-2024"), text("New tyre"), num(120000)],
        vec![e(), e(), e(), e(), text("Total Cost (ugx)"), num(120000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].vehicle_id, "UVS123A");
    assert_eq!(groups[0].items.len(), 2);
    assert_eq!(groups[0].items_total(), 80000);
    assert_eq!(groups[0].total_row_cost, Some(80000));

    assert_eq!(groups[1].seq, 2);
    assert_eq!(groups[1].vehicle_id, "UEJ447X");
    assert_eq!(groups[1].items_total(), 120000);
}

#[test]
fn test_group_opens_on_vehicle_even_without_number() {
    // hand-edited sheets may lose the No. column; the vehicle id still
    // starts a fresh group
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
        vec![e(), text("Masindi"), text("UEJ447X"), text("03-May-2024"), text("New tyre"), num(120000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].seq, 2, "missing number is assigned from position");
}

#[test]
fn test_rows_before_first_group_are_dropped() {
    let body: Grid = vec![
        vec![e(), e(), e(), e(), text("stray note"), e()],
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].items.len(), 1);
    assert_eq!(groups[0].items[0].description, "Oil change");
}

#[test]
fn test_blank_continuation_rows_are_skipped() {
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
        vec![e(), e(), e(), e(), e(), e()],
        vec![e(), e(), e(), e(), text("Brake pads"), num(30000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups[0].items.len(), 2);
}

#[test]
fn test_reported_total_prefers_recorded_total_row() {
    // a hand-edited total row wins over the recomputed sum
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
        vec![e(), e(), e(), e(), text("Total Cost (ugx)"), num(55000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups[0].items_total(), 50000);
    assert_eq!(groups[0].reported_total(), 55000);
}

#[test]
fn test_joined_descriptions_skip_blanks() {
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), num(50000)],
        vec![e(), e(), e(), e(), e(), num(5000)],
        vec![e(), e(), e(), e(), text("Brake pads"), num(30000)],
    ];

    let groups = build_groups(&body).expect("build groups");
    assert_eq!(groups[0].joined_descriptions(), "Oil change, Brake pads");
    assert_eq!(groups[0].items_total(), 85000);
}

#[test]
fn test_non_numeric_cost_in_group_is_an_error() {
    let body: Grid = vec![
        vec![num(1), text("Hoima"), text("UVS123A"), text("01-May-2024"), text("Oil change"), text("about 50k")],
    ];

    assert!(build_groups(&body).is_err());
}
