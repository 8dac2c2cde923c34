use pill_match::catalog::{self, CatalogStore, EntryDraft};
use pill_match::{CohortKey, PillMatchError};

use crate::utils::{complete_draft, names, reference};

fn admin_message(error: &PillMatchError) -> String {
    match error {
        PillMatchError::Admin(message) => message.clone(),
        other => panic!("expected admin error, got {other:?}"),
    }
}

#[test]
fn test_draft_validation_order() {
    let mut draft = EntryDraft::new();
    assert_eq!(
        admin_message(&draft.validate().unwrap_err()),
        "Please enter a generic name"
    );

    draft.generic_name = "New Pill".to_string();
    assert_eq!(
        admin_message(&draft.validate().unwrap_err()),
        "Please select a category"
    );

    draft.category = "Progestin-Only Pill".to_string();
    draft.description = "   ".to_string();
    assert_eq!(
        admin_message(&draft.validate().unwrap_err()),
        "Please enter a description"
    );

    draft.description = "Daily pill.".to_string();
    assert_eq!(
        admin_message(&draft.validate().unwrap_err()),
        "Please add at least one brand name"
    );

    assert!(draft.add_brand_name("  Slynd  "));
    assert!(!draft.add_brand_name("Slynd"));
    assert!(!draft.add_brand_name(" "));
    assert_eq!(draft.brand_names, ["Slynd"]);
    assert_eq!(
        admin_message(&draft.validate().unwrap_err()),
        "Please select at least one suitable group"
    );

    draft.suitable_groups.push(CohortKey::from_raw("Young - BMI Group 1"));
    assert!(draft.validate().is_ok());
}

#[test]
fn test_add_appends_and_rejects_duplicates() {
    let catalog = reference();

    let added = catalog::add_entry(&catalog, complete_draft("New Pill")).unwrap();
    assert_eq!(added.len(), 11);
    assert_eq!(added.entries().last().unwrap().generic_name, "New Pill");
    assert_eq!(catalog.len(), 10);

    let error =
        catalog::add_entry(&catalog, complete_draft("Levonorgestrel (Emergency)")).unwrap_err();
    assert_eq!(
        admin_message(&error),
        "A pill with this generic name already exists"
    );
}

#[test]
fn test_update_moves_entry_to_end() {
    let catalog = reference();
    let original = catalog.get("Norethindrone (Progestin-Only)").unwrap();

    let mut draft = EntryDraft::from_entry(original);
    draft.generic_name = "Norethindrone 0.35 mg".to_string();
    let updated = catalog::update_entry(&catalog, &original.generic_name, draft).unwrap();

    assert_eq!(updated.len(), 10);
    assert!(!updated.contains("Norethindrone (Progestin-Only)"));
    let last = updated.entries().last().unwrap();
    assert_eq!(last.generic_name, "Norethindrone 0.35 mg");
    assert_eq!(last.brand_names, original.brand_names);
}

#[test]
fn test_update_rejects_rename_onto_existing_name() {
    let catalog = reference();
    let original = catalog.get("Drospirenone (Progestin-Only)").unwrap();

    let mut draft = EntryDraft::from_entry(original);
    draft.generic_name = "Levonorgestrel (Emergency)".to_string();

    assert!(catalog::update_entry(&catalog, &original.generic_name, draft).is_err());
    assert!(catalog::update_entry(&catalog, "Missing Pill", complete_draft("X")).is_err());
}

#[test]
fn test_delete_entry() {
    let catalog = reference();

    let smaller = catalog::delete_entry(&catalog, "Levonorgestrel (Emergency)").unwrap();
    assert_eq!(smaller.len(), 9);
    assert!(!smaller.contains("Levonorgestrel (Emergency)"));

    assert!(catalog::delete_entry(&smaller, "Levonorgestrel (Emergency)").is_err());
}

#[test]
fn test_search_combines_term_and_category() {
    let catalog = reference();

    let drospirenone = catalog::search(&catalog, "DROSPIRENONE", "all");
    assert_eq!(
        names(&drospirenone),
        ["Drospirenone + Ethinyl Estradiol", "Drospirenone (Progestin-Only)"]
    );

    let progestin_only = catalog::search(&catalog, "drospirenone", "Progestin-Only Pill");
    assert_eq!(names(&progestin_only), ["Drospirenone (Progestin-Only)"]);

    assert_eq!(catalog::search(&catalog, "", "all").len(), catalog.len());
}

#[test]
fn test_store_applies_edits() {
    let store = CatalogStore::with_reference().unwrap();

    let updated = store
        .apply(|current| catalog::add_entry(current, complete_draft("Store Pill")))
        .unwrap();
    assert!(updated.contains("Store Pill"));
    assert!(store.snapshot().contains("Store Pill"));

    let rejected = store.apply(|current| catalog::add_entry(current, EntryDraft::new()));
    assert!(rejected.is_err());
    assert_eq!(store.snapshot().len(), 11);
}
