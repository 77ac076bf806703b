use bike_qr::core::directory::seed_bikes;
use bike_qr::{BikeDirectory, BikeRecord, BikeStatus};

#[test]
fn test_every_seed_id_resolves_to_exactly_its_record() {
    let directory = BikeDirectory::seeded();

    for seed in seed_bikes() {
        let found = directory.get_by_id(seed.id.as_str()).unwrap();
        assert_eq!(found, &seed);

        let matches = directory
            .list_all()
            .into_iter()
            .filter(|bike| bike.id == seed.id)
            .count();
        assert_eq!(matches, 1);
    }
}

#[test]
fn test_unknown_ids_are_absent_and_unavailable() {
    let directory = BikeDirectory::seeded();

    for id in ["99", "0", "", " 1", "1 ", "01", "surfjack"] {
        assert!(directory.get_by_id(id).is_none(), "id {:?} should be absent", id);
        assert!(!directory.is_available(id), "id {:?} should be unavailable", id);
    }
}

#[test]
fn test_is_available_matches_get_by_id() {
    let directory = BikeDirectory::seeded();

    for id in ["1", "2", "3", "4", "5", "6", "7", "99"] {
        let expected = directory
            .get_by_id(id)
            .map(|bike| bike.status == BikeStatus::Available)
            .unwrap_or(false);
        assert_eq!(directory.is_available(id), expected, "id {}", id);
    }
}

#[test]
fn test_numeric_and_string_ids_agree() {
    let directory = BikeDirectory::seeded();

    assert_eq!(directory.get_by_id(2), directory.get_by_id("2"));
    assert_eq!(directory.get_by_id(2u64), directory.get_by_id("2".to_string()));
    assert!(directory.is_available(1));
    assert!(!directory.is_available(2));
    assert!(directory.get_by_id(99).is_none());
}

#[test]
fn test_list_all_is_a_copy_in_seed_order() {
    let directory = BikeDirectory::seeded();

    let mut listed = directory.list_all();
    let ids: Vec<&str> = listed.iter().map(|bike| bike.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);

    listed.clear();
    listed.push(BikeRecord::new("42", BikeStatus::Available, None, "Ghost", "Nowhere"));

    let again = directory.list_all();
    assert_eq!(again.len(), 6);
    assert_eq!(again, seed_bikes());
    assert!(directory.get_by_id("42").is_none());
}

#[test]
fn test_fixture_directory_is_isolated_from_seed() {
    let directory = BikeDirectory::new(vec![
        BikeRecord::new("a1", BikeStatus::Rented, Some("monarch"), "Cruiser", "Monarch Valet Area"),
        BikeRecord::new("a2", BikeStatus::Available, None, "Cruiser", "Ala Moana Beach Park"),
    ])
    .unwrap();

    assert_eq!(directory.len(), 2);
    assert!(directory.get_by_id("1").is_none());
    assert!(directory.is_available("a2"));
    assert!(!directory.is_available("a1"));

    // Seed is untouched by other directories
    assert_eq!(BikeDirectory::seeded().len(), 6);
}
