//! JSON dump and restore of every table, one `<table>.json` file per entity,
//! plus a flat CSV export of the catalog.

use std::path::Path;

use anyhow::Result;
use sea_orm::{EntityName, EntityTrait, IntoActiveModel, QueryOrder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{db::OrmConn, entity::*};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: String,
    pub inserted: usize,
    pub failed: usize,
    pub missing: bool,
}

/// Writes every row of `E` to `<dir>/<table>.json`. Returns the row count.
pub async fn dump_table<E>(conn: &OrmConn, dir: &Path) -> Result<usize>
where
    E: EntityTrait,
    E::Model: Serialize,
{
    let rows = E::find().all(conn).await?;
    let path = dir.join(format!("{}.json", E::default().table_name()));
    tokio::fs::write(&path, serde_json::to_vec_pretty(&rows)?).await?;
    Ok(rows.len())
}

/// Inserts every row found in `<dir>/<table>.json`. Rows that fail to insert
/// (usually because they already exist) are counted and skipped.
pub async fn load_table<E>(conn: &OrmConn, dir: &Path) -> Result<TableReport>
where
    E: EntityTrait,
    E::Model: DeserializeOwned + IntoActiveModel<E::ActiveModel>,
{
    let table = E::default().table_name().to_string();
    let path = dir.join(format!("{table}.json"));
    let mut report = TableReport {
        table,
        ..Default::default()
    };

    if !tokio::fs::try_exists(&path).await? {
        report.missing = true;
        return Ok(report);
    }

    let rows: Vec<E::Model> = serde_json::from_slice(&tokio::fs::read(&path).await?)?;
    for row in rows {
        match E::insert(row.into_active_model())
            .exec_without_returning(conn)
            .await
        {
            Ok(_) => report.inserted += 1,
            Err(err) => {
                report.failed += 1;
                tracing::warn!(table = %report.table, error = %err, "skipping row");
            }
        }
    }
    Ok(report)
}

pub async fn export_all(conn: &OrmConn, dir: &Path) -> Result<Vec<(String, usize)>> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(vec![
        ("categories".into(), dump_table::<Categories>(conn, dir).await?),
        ("products".into(), dump_table::<Products>(conn, dir).await?),
        ("cart_items".into(), dump_table::<CartItems>(conn, dir).await?),
        ("wishlist_items".into(), dump_table::<WishlistItems>(conn, dir).await?),
        ("orders".into(), dump_table::<Orders>(conn, dir).await?),
        ("quick_orders".into(), dump_table::<QuickOrders>(conn, dir).await?),
        ("page_contents".into(), dump_table::<PageContents>(conn, dir).await?),
        ("hero_sections".into(), dump_table::<HeroSections>(conn, dir).await?),
        ("footer_links".into(), dump_table::<FooterLinks>(conn, dir).await?),
        ("blog_posts".into(), dump_table::<BlogPosts>(conn, dir).await?),
        ("menu_items".into(), dump_table::<MenuItems>(conn, dir).await?),
        ("media_files".into(), dump_table::<MediaFiles>(conn, dir).await?),
        ("site_settings".into(), dump_table::<SiteSettings>(conn, dir).await?),
    ])
}

pub async fn import_all(conn: &OrmConn, dir: &Path) -> Result<Vec<TableReport>> {
    Ok(vec![
        load_table::<Categories>(conn, dir).await?,
        load_table::<Products>(conn, dir).await?,
        load_table::<CartItems>(conn, dir).await?,
        load_table::<WishlistItems>(conn, dir).await?,
        load_table::<Orders>(conn, dir).await?,
        load_table::<QuickOrders>(conn, dir).await?,
        load_table::<PageContents>(conn, dir).await?,
        load_table::<HeroSections>(conn, dir).await?,
        load_table::<FooterLinks>(conn, dir).await?,
        load_table::<BlogPosts>(conn, dir).await?,
        load_table::<MenuItems>(conn, dir).await?,
        load_table::<MediaFiles>(conn, dir).await?,
        load_table::<SiteSettings>(conn, dir).await?,
    ])
}

/// One catalog line: badges are `|`-joined, a missing old price is left empty.
#[derive(Debug, Serialize)]
struct ProductCsvRow<'a> {
    id: String,
    article: &'a str,
    name: &'a str,
    price: f64,
    old_price: Option<f64>,
    discount: i32,
    image: &'a str,
    category: &'a str,
    badges: String,
    description: &'a str,
    stock: i32,
}

impl<'a> From<&'a products::Model> for ProductCsvRow<'a> {
    fn from(p: &'a products::Model) -> Self {
        let badges = p
            .badges
            .as_array()
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| n.as_str())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .unwrap_or_default();
        Self {
            id: p.id.to_string(),
            article: &p.article,
            name: &p.name,
            price: p.price,
            old_price: p.old_price,
            discount: p.discount,
            image: &p.image,
            category: &p.category,
            badges,
            description: &p.description,
            stock: p.stock,
        }
    }
}

/// Writes a header line and one record per product. Returns the record count.
pub fn write_products_csv<W: std::io::Write>(rows: &[products::Model], out: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(ProductCsvRow::from(row))?;
    }
    if rows.is_empty() {
        writer.write_record([
            "id",
            "article",
            "name",
            "price",
            "old_price",
            "discount",
            "image",
            "category",
            "badges",
            "description",
            "stock",
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Writes `<dir>/products.csv`, products ordered by name.
pub async fn export_products_csv(conn: &OrmConn, dir: &Path) -> Result<usize> {
    tokio::fs::create_dir_all(dir).await?;
    let rows = Products::find()
        .order_by_asc(products::Column::Name)
        .all(conn)
        .await?;
    let mut buf = Vec::new();
    let count = write_products_csv(&rows, &mut buf)?;
    tokio::fs::write(dir.join("products.csv"), buf).await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_orm_conn, run_migrations};
    use sea_orm::{ActiveModelTrait, PaginatorTrait, Set};
    use uuid::Uuid;

    async fn fresh_db() -> OrmConn {
        let conn = create_orm_conn("sqlite::memory:", 1).await.unwrap();
        run_migrations(&conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn export_then_import_copies_rows() {
        let source = fresh_db().await;
        categories::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Самшит".into()),
            icon: Set("box.png".into()),
            count: Set(3),
        }
        .insert(&source)
        .await
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let counts = export_all(&source, dir.path()).await.unwrap();
        assert!(counts.contains(&("categories".to_string(), 1)));
        assert!(dir.path().join("products.json").exists());

        let target = fresh_db().await;
        let reports = import_all(&target, dir.path()).await.unwrap();
        let categories = reports.iter().find(|r| r.table == "categories").unwrap();
        assert_eq!(categories.inserted, 1);
        assert_eq!(Categories::find().count(&target).await.unwrap(), 1);

        // Second import collides on primary keys and is counted, not fatal.
        let again = load_table::<Categories>(&target, dir.path()).await.unwrap();
        assert_eq!(again.inserted, 0);
        assert_eq!(again.failed, 1);
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let conn = fresh_db().await;
        let dir = tempfile::tempdir().unwrap();
        let report = load_table::<BlogPosts>(&conn, dir.path()).await.unwrap();
        assert!(report.missing);
        assert_eq!(report.inserted, 0);
    }

    fn sample_product(badges: serde_json::Value, old_price: Option<f64>) -> products::Model {
        products::Model {
            id: Uuid::nil(),
            name: "Туя, западная".into(),
            article: "TH-01".into(),
            price: 450.0,
            old_price,
            discount: 10,
            image: "/uploads/thuja.jpg".into(),
            category: "Хвойные".into(),
            badges,
            description: "Line one\nline two".into(),
            stock: 7,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn products_csv_has_header_and_joined_badges() {
        let rows = vec![sample_product(serde_json::json!(["sale", "hit"]), None)];
        let mut buf = Vec::new();
        assert_eq!(write_products_csv(&rows, &mut buf).unwrap(), 1);

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,article,name,price,old_price,discount,image,category,badges,description,stock"
        );

        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], Uuid::nil().to_string());
        assert_eq!(&record[2], "Туя, западная");
        assert_eq!(&record[3], "450.0");
        assert_eq!(&record[4], "");
        assert_eq!(&record[8], "sale|hit");
        assert_eq!(&record[9], "Line one\nline two");
        assert_eq!(&record[10], "7");
    }

    #[test]
    fn empty_catalog_still_writes_header() {
        let mut buf = Vec::new();
        assert_eq!(write_products_csv(&[], &mut buf).unwrap(), 0);
        assert!(String::from_utf8(buf).unwrap().starts_with("id,article,name,"));
    }

    #[tokio::test]
    async fn products_csv_export_writes_file() {
        let conn = fresh_db().await;
        sample_product(serde_json::json!([]), Some(500.0))
            .into_active_model()
            .insert(&conn)
            .await
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(export_products_csv(&conn, dir.path()).await.unwrap(), 1);
        let text = std::fs::read_to_string(dir.path().join("products.csv")).unwrap();
        assert!(text.contains("TH-01"));
        assert!(text.contains("500.0"));
    }
}
