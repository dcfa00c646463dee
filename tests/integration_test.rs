use anyhow::Result;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use themeapp::catalog::{load_catalog_file, parse_catalog};
use themeapp::style::{about, contact, header, home, product_card, shell, sidebar};
use themeapp::{
    CatalogStatus, CatalogViewPlan, FileStorage, MemoryStorage, ShellPlan, ShellState, StyleBundle,
    ThemeStore, Variant, PREFERENCE_KEY,
};

fn store_over(storage: &MemoryStorage) -> ThemeStore {
    let mut store = ThemeStore::new(Some(Box::new(storage.clone())));
    store.initialize();
    store
}

#[test]
fn test_preference_survives_restart_on_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("themeapp").join("preferences.json");

    {
        let mut store = ThemeStore::new(Some(Box::new(FileStorage::open(&path))));
        store.initialize();
        assert_eq!(store.get(), Variant::Minimalist);
        store.set(Variant::Playful);
    }

    let written = fs::read_to_string(&path)?;
    let values: serde_json::Value = serde_json::from_str(&written)?;
    assert_eq!(values[PREFERENCE_KEY], "theme3");

    let mut restarted = ThemeStore::new(Some(Box::new(FileStorage::open(&path))));
    restarted.initialize();
    assert_eq!(restarted.get(), Variant::Playful);
    Ok(())
}

#[test]
fn test_corrupt_preference_file_starts_from_default() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json")?;

    let mut store = ThemeStore::new(Some(Box::new(FileStorage::open(&path))));
    store.initialize();
    assert_eq!(store.get(), Variant::Minimalist);

    store.set(Variant::Professional);
    let values: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(values[PREFERENCE_KEY], "theme2");
    Ok(())
}

#[test]
fn test_initialize_from_stored_ids() {
    let cases = [
        (Some("theme1"), Variant::Minimalist),
        (Some("theme2"), Variant::Professional),
        (Some("theme3"), Variant::Playful),
        (Some("bogus"), Variant::Minimalist),
        (Some(""), Variant::Minimalist),
        (None, Variant::Minimalist),
    ];

    for (stored, expected) in cases {
        let storage = match stored {
            Some(id) => MemoryStorage::with_entry(PREFERENCE_KEY, id),
            None => MemoryStorage::new(),
        };
        assert_eq!(store_over(&storage).get(), expected, "stored value {stored:?}");
    }
}

#[test]
fn test_unknown_id_changes_nothing() {
    let storage = MemoryStorage::with_entry(PREFERENCE_KEY, "theme2");
    let mut store = store_over(&storage);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |variant| sink.borrow_mut().push(variant));

    assert!(store.set_id("bogus").is_err());
    assert_eq!(store.get(), Variant::Professional);
    assert_eq!(storage.get(PREFERENCE_KEY).as_deref(), Some("theme2"));
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_subscribers_see_change_before_set_returns() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |variant| sink.borrow_mut().push(variant));

    store.set(Variant::Professional);
    assert_eq!(*seen.borrow(), vec![Variant::Professional]);
    assert_eq!(store.get(), Variant::Professional);
}

#[test]
fn test_every_resolver_is_complete_for_every_variant() {
    fn slot_names<B: StyleBundle>(bundle: B) -> Vec<&'static str> {
        let slots = bundle.slots();
        assert!(!slots.is_empty());
        assert!(slots.iter().all(|(_, token)| token.is_defined()));
        slots.into_iter().map(|(name, _)| name).collect()
    }

    let reference = Variant::Minimalist;
    for variant in Variant::ALL {
        assert_eq!(slot_names(header::resolve(variant)), slot_names(header::resolve(reference)));
        assert_eq!(slot_names(shell::resolve(variant)), slot_names(shell::resolve(reference)));
        assert_eq!(slot_names(home::resolve(variant)), slot_names(home::resolve(reference)));
        assert_eq!(slot_names(about::resolve(variant)), slot_names(about::resolve(reference)));
        assert_eq!(slot_names(contact::resolve(variant)), slot_names(contact::resolve(reference)));
        assert_eq!(
            slot_names(product_card::resolve(variant)),
            slot_names(product_card::resolve(reference))
        );
    }

    let professional = sidebar::resolve(Variant::Professional).expect("professional sidebar");
    assert!(!slot_names(professional).is_empty());
}

#[test]
fn test_switching_away_from_professional_drops_sidebar() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    let mut shell_state = ShellState::new();

    store.set(Variant::Professional);
    let plan = ShellPlan::compose(store.get(), themeapp::shell::page_wants_sidebar(store.get()));
    shell_state.sync(&plan, 0.0);
    assert!(plan.has_sidebar());
    assert_eq!(plan.content_inset, themeapp::shell::SIDEBAR_WIDTH);
    shell_state.sidebar_mut().expect("sidebar state").active = Some(1);

    store.set(Variant::Playful);
    let plan = ShellPlan::compose(store.get(), themeapp::shell::page_wants_sidebar(store.get()));
    shell_state.sync(&plan, 1.0);
    assert!(!plan.has_sidebar());
    assert_eq!(plan.content_inset, 0.0);
    assert!(shell_state.sidebar().is_none());
}

#[test]
fn test_catalog_file_drives_cards() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("products.json");
    fs::write(
        &path,
        r#"[
            {"id": 11, "title": "Lamp", "price": 19.5, "description": "Warm light",
             "image": "https://example.com/lamp.png", "rating": {"rate": 3.9, "count": 120}},
            {"id": 12, "title": "Desk", "price": 240, "description": "Oak",
             "image": "https://example.com/desk.png", "rating": {"rate": 4.6, "count": 8}}
        ]"#,
    )?;

    let status = CatalogStatus::Ready(load_catalog_file(&path)?);
    let plan = CatalogViewPlan::build(&status, Variant::Playful);
    let CatalogViewPlan::Cards { cards, .. } = plan else {
        panic!("expected cards");
    };

    let titles: Vec<&str> = cards.iter().map(|card| card.product.title.as_str()).collect();
    assert_eq!(titles, ["Lamp", "Desk"]);
    assert_eq!(cards[0].price_text, "$19.50");
    assert_eq!((cards[0].stars_filled, cards[0].stars_total), (3, 5));
    assert_eq!(cards[1].price_text, "$240.00");
    assert_eq!(cards[1].stars_filled, 4);
    Ok(())
}

#[test]
fn test_catalog_error_suppresses_grid() {
    let message = parse_catalog("not json").unwrap_err().to_string();
    let status = CatalogStatus::Error(message);
    let plan = CatalogViewPlan::build(&status, Variant::Minimalist);

    assert_eq!(plan.card_count(), 0);
    let CatalogViewPlan::Error { message } = plan else {
        panic!("expected error");
    };
    assert!(message.starts_with("Error loading products: malformed catalog"));
}
