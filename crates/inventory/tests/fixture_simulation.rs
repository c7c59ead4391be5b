//! Multi-day run over the classic shop catalog.

use gildedrose_inventory::{GildedRose, Item};

fn fixture() -> GildedRose {
    gildedrose_observability::init();

    GildedRose::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
    ])
}

fn snapshot(app: &GildedRose) -> Vec<(i32, i32)> {
    app.items().iter().map(|i| (i.sell_in, i.quality)).collect()
}

#[test]
fn catalog_after_one_day() {
    let mut app = fixture();
    app.update_quality();

    assert_eq!(
        snapshot(&app),
        vec![(9, 19), (1, 1), (4, 6), (0, 80), (-1, 80), (14, 21), (9, 50), (4, 50)]
    );
}

#[test]
fn catalog_after_two_days() {
    let mut app = fixture();
    app.advance_days(2);

    assert_eq!(
        snapshot(&app),
        vec![(8, 18), (0, 2), (3, 5), (0, 80), (-1, 80), (13, 22), (8, 50), (3, 50)]
    );
}

#[test]
fn catalog_when_first_items_expire() {
    let mut app = fixture();
    app.advance_days(6);

    assert_eq!(
        snapshot(&app),
        vec![(4, 14), (-4, 10), (-1, 0), (0, 80), (-1, 80), (9, 27), (4, 50), (-1, 0)]
    );
}

#[test]
fn catalog_after_fifteen_days() {
    let mut app = fixture();
    app.advance_days(15);

    assert_eq!(
        snapshot(&app),
        vec![(-5, 0), (-13, 28), (-10, 0), (0, 80), (-1, 80), (0, 50), (-5, 0), (-10, 0)]
    );
}

#[test]
fn rendered_lines_match_fixture_format() {
    let mut app = fixture();
    app.update_quality();

    let lines: Vec<String> = app.items().iter().map(ToString::to_string).collect();
    assert_eq!(lines[0], "+5 Dexterity Vest, 9, 19");
    assert_eq!(lines[3], "Sulfuras, Hand of Ragnaros, 0, 80");
    assert_eq!(lines[5], "Backstage passes to a TAFKAL80ETC concert, 14, 21");
}

#[test]
fn catalog_loaded_from_json_ages_the_same() {
    let json = r#"[
        {"name": "+5 Dexterity Vest", "sell_in": 10, "quality": 20},
        {"name": "Aged Brie", "sell_in": 2, "quality": 0},
        {"name": "Sulfuras, Hand of Ragnaros", "sell_in": 0, "quality": 80}
    ]"#;
    let items: Vec<Item> = serde_json::from_str(json).unwrap();
    let mut app = GildedRose::new(items);
    app.update_quality();

    assert_eq!(snapshot(&app), vec![(9, 19), (1, 1), (0, 80)]);
}
