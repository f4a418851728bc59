use chrono::{NaiveDate, NaiveDateTime};
use fitflow::domain::clothing_item::{NewClothingItem, UpdateClothingItem};
use fitflow::domain::occasion::{NewOccasion, UpdateOccasion};
use fitflow::domain::suggestion::TargetTag;
use fitflow::domain::types::{
    Category, ClothingItemId, ClothingName, ClothingOccasion, Color, Gender, ImageUrl,
    OccasionTitle, OccasionType, Price, Role, UserEmail, UserId, UserName,
};
use fitflow::domain::user::{NewUser, UpdateUser, UpdateUserProfile};
use fitflow::repository::errors::RepositoryError;
use fitflow::repository::{
    ClothingItemReader, ClothingItemWriter, DieselRepository, FavoriteReader, FavoriteWriter,
    OccasionReader, OccasionWriter, UserReader, UserWriter,
};

mod common;

fn user_id(id: i32) -> UserId {
    UserId::new(id).unwrap()
}

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, d)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn new_item(owner: i32, name: &str, tag: &str, created_day: u32) -> NewClothingItem {
    NewClothingItem::new(
        user_id(owner),
        ClothingName::new(name).unwrap(),
        Category::new("Dress").unwrap(),
        Color::new("Blue").unwrap(),
        ClothingOccasion::new(tag).unwrap(),
        None,
        Some(Price::new(80.0).unwrap()),
        ImageUrl::new(format!("https://img.example.com/{}.jpg", name.replace(' ', "-"))).unwrap(),
    )
    .created_at(day(created_day))
}

fn new_occasion(owner: i32, occasion_type: &str, clothes: Vec<ClothingItemId>) -> NewOccasion {
    NewOccasion {
        clothes_list: clothes,
        ..NewOccasion::new(
            user_id(owner),
            OccasionTitle::new("Cousin's wedding").unwrap(),
            OccasionType::new(occasion_type),
            NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
        )
    }
}

fn names(items: &[fitflow::domain::clothing_item::ClothingItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn test_clothing_item_repository_crud() {
    let test_db = common::TestDb::new("test_clothing_item_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let shirt = repo
        .create_clothing_item(&new_item(1, "Linen shirt", "casual", 1))
        .unwrap();
    assert_eq!(shirt.owner_id.get(), 1);
    assert_eq!(shirt.price, Some(Price::new(80.0).unwrap()));
    assert_eq!(shirt.created_at, day(1));

    let updates = UpdateClothingItem {
        color: Some(Color::new("White").unwrap()),
        gender: Some(Gender::new("male").unwrap()),
        ..Default::default()
    };
    let updated = repo.update_clothing_item(shirt.id, user_id(1), &updates).unwrap();
    assert_eq!(updated.color.as_str(), "White");
    assert_eq!(updated.gender.unwrap().as_str(), "male");
    assert_eq!(updated.name.as_str(), "Linen shirt");

    // Another owner can neither see nor change the item.
    assert!(repo.get_clothing_item(shirt.id, user_id(2)).unwrap().is_none());
    assert!(matches!(
        repo.update_clothing_item(shirt.id, user_id(2), &updates),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.delete_clothing_item(shirt.id, user_id(2)),
        Err(RepositoryError::NotFound)
    ));

    repo.delete_clothing_item(shirt.id, user_id(1)).unwrap();
    assert!(repo.get_clothing_item(shirt.id, user_id(1)).unwrap().is_none());
    assert!(repo.list_clothing_items(user_id(1)).unwrap().is_empty());
}

#[test]
fn test_wardrobe_is_listed_newest_first() {
    let test_db = common::TestDb::new("test_wardrobe_is_listed_newest_first.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "Old coat", "winter", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "New coat", "winter", 5))
        .unwrap();
    repo.create_clothing_item(&new_item(2, "Not mine", "winter", 9))
        .unwrap();

    let items = repo.list_clothing_items(user_id(1)).unwrap();
    assert_eq!(names(&items), vec!["New coat", "Old coat"]);
}

#[test]
fn test_tag_matching_is_case_insensitive_substring() {
    let test_db = common::TestDb::new("test_tag_matching.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "Party shirt", "Beach Party", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "Suit", "Business", 2))
        .unwrap();
    repo.create_clothing_item(&new_item(2, "Foreign shorts", "beach", 3))
        .unwrap();

    let items = repo
        .find_clothing_items_by_tag(user_id(1), &TargetTag::for_occasion_type("beach"))
        .unwrap();

    assert_eq!(names(&items), vec!["Party shirt"]);
}

#[test]
fn test_wedding_scenario_orders_by_creation_time() {
    let test_db = common::TestDb::new("test_wedding_scenario.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "Silk dress", "wedding", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "Floral dress", "Wedding Guest", 2))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "Hoodie", "casual", 3))
        .unwrap();

    let tag = TargetTag::for_occasion_type("Wedding ");
    let items = repo.find_clothing_items_by_tag(user_id(1), &tag).unwrap();

    assert_eq!(names(&items), vec!["Floral dress", "Silk dress"]);
    assert_eq!(
        repo.count_clothing_items_with_exact_tag(user_id(1), &tag)
            .unwrap(),
        1
    );
}

#[test]
fn test_like_wildcards_in_tags_are_literal() {
    let test_db = common::TestDb::new("test_like_wildcards.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "Jacket", "work", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "Discount tee", "100% casual", 2))
        .unwrap();

    let items = repo
        .find_clothing_items_by_tag(user_id(1), &TargetTag::for_occasion_type("%"))
        .unwrap();

    assert_eq!(names(&items), vec!["Discount tee"]);
}

#[test]
fn test_distinct_tags_are_sorted_per_owner() {
    let test_db = common::TestDb::new("test_distinct_tags.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "A", "wedding", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "B", "casual", 2))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "C", "wedding", 3))
        .unwrap();
    repo.create_clothing_item(&new_item(2, "D", "gala", 4))
        .unwrap();

    let tags = repo.list_distinct_clothing_tags(user_id(1)).unwrap();
    assert_eq!(tags, vec!["casual".to_string(), "wedding".to_string()]);
}

#[test]
fn test_occasion_repository_crud() {
    let test_db = common::TestDb::new("test_occasion_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let dress = repo
        .create_clothing_item(&new_item(1, "Silk dress", "wedding", 1))
        .unwrap();
    let heels = repo
        .create_clothing_item(&new_item(1, "Heels", "wedding", 2))
        .unwrap();

    let occasion = repo
        .create_occasion(&new_occasion(1, "Wedding", vec![heels.id, dress.id]))
        .unwrap();
    assert_eq!(occasion.clothes_list, vec![heels.id, dress.id]);
    assert_eq!(occasion.occasion_type.as_str(), "Wedding");

    let loaded = repo.get_occasion(occasion.id, user_id(1)).unwrap().unwrap();
    assert_eq!(loaded.clothes_list, vec![heels.id, dress.id]);
    assert!(repo.get_occasion(occasion.id, user_id(2)).unwrap().is_none());

    let updates = UpdateOccasion {
        occasion_type: Some(OccasionType::new("gala")),
        clothes_list: Some(vec![dress.id]),
        ..Default::default()
    };
    let updated = repo.update_occasion(occasion.id, user_id(1), &updates).unwrap();
    assert_eq!(updated.occasion_type.as_str(), "gala");
    assert_eq!(updated.clothes_list, vec![dress.id]);
    assert_eq!(updated.title.as_str(), "Cousin's wedding");

    // Fields left out of the update keep the clothes list intact.
    let renamed = repo
        .update_occasion(
            occasion.id,
            user_id(1),
            &UpdateOccasion {
                title: Some(OccasionTitle::new("Gala night").unwrap()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.clothes_list, vec![dress.id]);

    assert!(matches!(
        repo.delete_occasion(occasion.id, user_id(2)),
        Err(RepositoryError::NotFound)
    ));
    repo.delete_occasion(occasion.id, user_id(1)).unwrap();
    assert!(repo.list_occasions(user_id(1)).unwrap().is_empty());
}

#[test]
fn test_deleting_item_removes_it_from_clothes_lists() {
    let test_db = common::TestDb::new("test_deleting_item_cascades.db");
    let repo = DieselRepository::new(test_db.pool());

    let dress = repo
        .create_clothing_item(&new_item(1, "Silk dress", "wedding", 1))
        .unwrap();
    let heels = repo
        .create_clothing_item(&new_item(1, "Heels", "wedding", 2))
        .unwrap();
    let occasion = repo
        .create_occasion(&new_occasion(1, "wedding", vec![dress.id, heels.id]))
        .unwrap();

    repo.delete_clothing_item(dress.id, user_id(1)).unwrap();

    let occasions = repo.list_occasions(user_id(1)).unwrap();
    assert_eq!(occasions.len(), 1);
    assert_eq!(occasions[0].id, occasion.id);
    assert_eq!(occasions[0].clothes_list, vec![heels.id]);
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_user = NewUser::new(
        user_id(7),
        UserEmail::new("Stylist@Example.com").unwrap(),
        UserName::new("Stylist").unwrap(),
        Role::Styler,
    );
    let created = repo.create_user(&new_user).unwrap();
    assert_eq!(created.id.get(), 7);
    assert_eq!(created.email.as_str(), "stylist@example.com");
    assert!(!created.is_approved);
    assert!(created.gender.is_none());

    assert!(matches!(
        repo.create_user(&new_user),
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let by_email = repo
        .get_user_by_email(&UserEmail::new("stylist@example.com").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);

    let updated = repo
        .update_user_profile(
            created.id,
            &UpdateUserProfile {
                gender: Some(Gender::new("female").unwrap()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.gender.unwrap().as_str(), "female");
    assert_eq!(updated.name.as_str(), "Stylist");

    let unchanged = repo
        .update_user_profile(created.id, &UpdateUserProfile::default())
        .unwrap();
    assert_eq!(unchanged.name.as_str(), "Stylist");

    let approved = repo.set_user_approved(created.id, true).unwrap();
    assert!(approved.is_approved);

    assert!(repo.get_user_by_id(user_id(8)).unwrap().is_none());
    assert_eq!(repo.list_users().unwrap().len(), 1);
}

#[test]
fn test_tag_matching_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_tag_matching_non_ascii.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_clothing_item(&new_item(1, "Tricolour scarf", "FÊTE Nationale", 1))
        .unwrap();
    repo.create_clothing_item(&new_item(1, "Dirndl", "Äpfelfest", 2))
        .unwrap();

    let fete = repo
        .find_clothing_items_by_tag(user_id(1), &TargetTag::for_occasion_type("Fête"))
        .unwrap();
    assert_eq!(names(&fete), vec!["Tricolour scarf"]);

    let apfel = TargetTag::for_occasion_type("ÄPFEL");
    let items = repo.find_clothing_items_by_tag(user_id(1), &apfel).unwrap();
    assert_eq!(names(&items), vec!["Dirndl"]);

    let exact = TargetTag::for_occasion_type("äpfelfest");
    assert_eq!(
        repo.count_clothing_items_with_exact_tag(user_id(1), &exact)
            .unwrap(),
        1
    );
}

#[test]
fn test_favorites_toggle_and_list_newest_first() {
    let test_db = common::TestDb::new("test_favorites_toggle.db");
    let repo = DieselRepository::new(test_db.pool());

    let dress = repo
        .create_clothing_item(&new_item(1, "Silk dress", "wedding", 1))
        .unwrap();
    let heels = repo
        .create_clothing_item(&new_item(1, "Heels", "wedding", 2))
        .unwrap();

    assert!(repo.toggle_favorite(user_id(1), dress.id).unwrap());
    assert!(repo.toggle_favorite(user_id(1), heels.id).unwrap());
    assert_eq!(
        names(&repo.list_favorite_items(user_id(1)).unwrap()),
        vec!["Heels", "Silk dress"]
    );

    assert!(!repo.toggle_favorite(user_id(1), heels.id).unwrap());
    assert_eq!(
        names(&repo.list_favorite_items(user_id(1)).unwrap()),
        vec!["Silk dress"]
    );
    assert!(repo.list_favorite_items(user_id(2)).unwrap().is_empty());

    // Deleting the item drops it from every favorites list.
    repo.delete_clothing_item(dress.id, user_id(1)).unwrap();
    assert!(repo.list_favorite_items(user_id(1)).unwrap().is_empty());
}

#[test]
fn test_admin_user_update_and_delete() {
    let test_db = common::TestDb::new("test_admin_user_update_and_delete.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_user(&NewUser {
            gender: Some(Gender::new("male").unwrap()),
            is_approved: true,
            ..NewUser::new(
                user_id(5),
                UserEmail::new("partner@example.com").unwrap(),
                UserName::new("Partner").unwrap(),
                Role::Styler,
            )
        })
        .unwrap();
    assert!(created.is_approved);
    assert_eq!(created.gender.unwrap().as_str(), "male");

    let promoted = repo
        .update_user(
            created.id,
            &UpdateUser {
                role: Some(Role::Partner),
                is_approved: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(promoted.role, Role::Partner);
    assert!(!promoted.is_approved);
    assert_eq!(promoted.name.as_str(), "Partner");

    let unchanged = repo.update_user(created.id, &UpdateUser::default()).unwrap();
    assert_eq!(unchanged.role, Role::Partner);
    assert!(matches!(
        repo.update_user(user_id(6), &UpdateUser::default()),
        Err(RepositoryError::NotFound)
    ));

    let scarf = repo
        .create_clothing_item(&new_item(5, "Scarf", "winter", 1))
        .unwrap();
    repo.toggle_favorite(created.id, scarf.id).unwrap();

    repo.delete_user(created.id).unwrap();
    assert!(repo.get_user_by_id(created.id).unwrap().is_none());
    assert!(repo.list_favorite_items(created.id).unwrap().is_empty());
    // The wardrobe itself is kept.
    assert_eq!(repo.list_clothing_items(created.id).unwrap().len(), 1);

    assert!(matches!(
        repo.delete_user(created.id),
        Err(RepositoryError::NotFound)
    ));
}
