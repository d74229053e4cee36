//! Integration tests for the catalog hierarchy repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create full hierarchy (category -> subcategory -> photo)
//! - Photo display ordering (sort_order, then uploaded_at)
//! - Description inheritance for blank descriptions
//! - Cascade delete behaviour

use sqlx::PgPool;
use vitrina_db::models::category::{
    CreateCategory, CreateSubcategory, UpdateCategory, UpdateSubcategory,
};
use vitrina_db::models::photo::{CreatePhoto, UpdatePhoto};
use vitrina_db::repositories::{CategoryRepo, PhotoRepo, SubcategoryRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_subcategory(pool: &PgPool, category: &str, subcategory: &str) -> (i64, i64) {
    let cat = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: category.to_string(),
        },
    )
    .await
    .unwrap();
    let sub = SubcategoryRepo::create(
        pool,
        &CreateSubcategory {
            category_id: cat.id,
            name: subcategory.to_string(),
        },
    )
    .await
    .unwrap();
    (cat.id, sub.id)
}

fn new_photo(subcategory_id: i64, path: &str, sort_order: Option<i32>) -> CreatePhoto {
    CreatePhoto {
        subcategory_id,
        image_path: path.to_string(),
        description: None,
        sort_order,
    }
}

// ---------------------------------------------------------------------------
// Hierarchy CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_hierarchy(pool: PgPool) {
    let (cat_id, sub_id) = seed_subcategory(&pool, "HOGAR", "Cocinas").await;

    let categories = CategoryRepo::list_all(&pool).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "HOGAR");

    let subs = SubcategoryRepo::list_by_category(&pool, cat_id).await.unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].id, sub_id);

    let joined = SubcategoryRepo::find_with_category(&pool, sub_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(joined.name, "Cocinas");
    assert_eq!(joined.category_name, "HOGAR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_category_and_subcategory(pool: PgPool) {
    let (cat_id, sub_id) = seed_subcategory(&pool, "HOGAR", "Cocinas").await;

    let cat = CategoryRepo::update(
        &pool,
        cat_id,
        &UpdateCategory {
            name: Some("EMPRESA".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cat.name, "EMPRESA");

    // A `None` name leaves the current value untouched.
    let sub = SubcategoryRepo::update(&pool, sub_id, &UpdateSubcategory { name: None })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sub.name, "Cocinas");

    assert!(CategoryRepo::update(
        &pool,
        999_999,
        &UpdateCategory {
            name: Some("x".into())
        }
    )
    .await
    .unwrap()
    .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cascade_delete_category_drops_dependents(pool: PgPool) {
    let (cat_id, sub_id) = seed_subcategory(&pool, "HOGAR", "Cocinas").await;
    PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/a.jpg", None))
        .await
        .unwrap();

    assert!(CategoryRepo::delete(&pool, cat_id).await.unwrap());

    assert!(SubcategoryRepo::find_by_id(&pool, sub_id)
        .await
        .unwrap()
        .is_none());
    let photos = PhotoRepo::list_by_subcategory(&pool, sub_id).await.unwrap();
    assert!(photos.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_rows_returns_false(pool: PgPool) {
    assert!(!CategoryRepo::delete(&pool, 1).await.unwrap());
    assert!(!SubcategoryRepo::delete(&pool, 1).await.unwrap());
    assert!(!PhotoRepo::delete(&pool, 1).await.unwrap());
}

// ---------------------------------------------------------------------------
// Photo ordering and description inheritance
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn photos_are_listed_by_sort_order_then_upload_time(pool: PgPool) {
    let (_, sub_id) = seed_subcategory(&pool, "HOGAR", "Cocinas").await;

    let second = PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/b.jpg", Some(1)))
        .await
        .unwrap();
    let third = PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/c.jpg", Some(2)))
        .await
        .unwrap();
    let first = PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/a.jpg", Some(0)))
        .await
        .unwrap();

    let photos = PhotoRepo::list_by_subcategory(&pool, sub_id).await.unwrap();
    let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    let featured = PhotoRepo::first_by_subcategory(&pool, sub_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(featured.id, first.id);

    // Sort order is not unique; ties break on upload time.
    let tied_late = PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/d.jpg", Some(0)))
        .await
        .unwrap();
    sqlx::query("UPDATE photos SET uploaded_at = uploaded_at - INTERVAL '1 hour' WHERE id = $1")
        .bind(first.id)
        .execute(&pool)
        .await
        .unwrap();

    let photos = PhotoRepo::list_by_subcategory(&pool, sub_id).await.unwrap();
    let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, tied_late.id, second.id, third.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_description_inherits_subcategory_name(pool: PgPool) {
    let (_, sub_id) = seed_subcategory(&pool, "HOGAR", "Cocinas").await;

    let missing = PhotoRepo::create(&pool, &new_photo(sub_id, "hogar/a.jpg", None))
        .await
        .unwrap();
    assert_eq!(missing.description.as_deref(), Some("Cocinas"));

    let blank = PhotoRepo::create(
        &pool,
        &CreatePhoto {
            subcategory_id: sub_id,
            image_path: "hogar/b.jpg".into(),
            description: Some("   ".into()),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(blank.description.as_deref(), Some("Cocinas"));

    let explicit = PhotoRepo::create(
        &pool,
        &CreatePhoto {
            subcategory_id: sub_id,
            image_path: "hogar/c.jpg".into(),
            description: Some("Cocina integral blanca".into()),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(explicit.description.as_deref(), Some("Cocina integral blanca"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_defaults_and_update(pool: PgPool) {
    let (_, sub_id) = seed_subcategory(&pool, "EMPRESA", "Oficinas").await;

    let photo = PhotoRepo::create(&pool, &new_photo(sub_id, "empresa/x.jpg", None))
        .await
        .unwrap();
    assert_eq!(photo.sort_order, 0);

    let updated = PhotoRepo::update(
        &pool,
        photo.id,
        &UpdatePhoto {
            description: Some("Escritorio en L".into()),
            sort_order: Some(5),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.description.as_deref(), Some("Escritorio en L"));
    assert_eq!(updated.sort_order, 5);
    // The asset reference and upload timestamp never change on update.
    assert_eq!(updated.image_path, photo.image_path);
    assert_eq!(updated.uploaded_at, photo.uploaded_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_rejects_unknown_subcategory(pool: PgPool) {
    let result = PhotoRepo::create(&pool, &new_photo(424242, "x/y.jpg", None)).await;
    assert!(result.is_err(), "foreign key violation expected");
}
