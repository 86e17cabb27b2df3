use sea_orm::*;

use crate::actor::Actor;
use crate::models::{product, product_type, user};
use crate::services::audit;

/// Seed a small demo catalog. Safe to re-run: everything is keyed by a
/// fresh UUID, so repeated seeding just adds more demo rows.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let seeder = Actor {
        id: audit::new_id(),
        email: "seed@catalog.local".to_string(),
    };
    let stamp = Some(audit::actor_json(&seeder));

    // 1. Admin user
    let now = audit::now_rfc3339();
    let admin = user::ActiveModel {
        id: Set(audit::new_id()),
        name: Set("Admin".to_owned()),
        email: Set("admin@catalog.local".to_owned()),
        role: Set("admin".to_owned()),
        address: Set(None),
        phone: Set(None),
        created_by: Set(stamp.clone()),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };
    user::Entity::insert(admin).exec(db).await?;

    // 2. Product types
    let mut type_ids = Vec::new();
    for (name, description) in [
        ("Coffee", "Hot and iced coffee drinks"),
        ("Tea", "Loose leaf and bagged teas"),
        ("Pastry", "Baked goods"),
    ] {
        let now = audit::now_rfc3339();
        let id = audit::new_id();
        let new_type = product_type::ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_owned()),
            description: Set(Some(description.to_owned())),
            logo: Set(None),
            created_by: Set(stamp.clone()),
            updated_by: Set(None),
            deleted_by: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            is_deleted: Set(false),
            deleted_at: Set(None),
        };
        product_type::Entity::insert(new_type).exec(db).await?;
        type_ids.push(id);
    }

    // 3. Products
    for (name, type_idx, price) in [
        ("Latte", 0usize, 45000i64),
        ("Espresso", 0, 30000),
        ("Green Tea", 1, 25000),
        ("Croissant", 2, 35000),
    ] {
        let now = audit::now_rfc3339();
        let new_product = product::ActiveModel {
            id: Set(audit::new_id()),
            name: Set(name.to_owned()),
            type_id: Set(type_ids.get(type_idx).cloned()),
            price: Set(price),
            description: Set(None),
            is_active: Set(true),
            image: Set(None),
            created_by: Set(stamp.clone()),
            updated_by: Set(None),
            deleted_by: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            is_deleted: Set(false),
            deleted_at: Set(None),
        };
        product::Entity::insert(new_product).exec(db).await?;
    }

    Ok(())
}
