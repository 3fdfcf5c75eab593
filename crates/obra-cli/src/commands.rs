//! One function per subcommand. Each returns the text to print.

use std::{fmt::Write as _, sync::Arc};

use anyhow::Context as _;
use obra_core::{
  CollectionHub,
  Record,
  Repository,
  contact::{Client, Supplier},
  dashboard::{Snapshot, Summary},
  employee::Employee,
  inspection::Inspection,
  inventory::{InventoryItem, InventoryPatch},
  numeric,
  project::Project,
  repo::{Clients, Employees, Inspections, Inventory, Projects, Suppliers},
  seed,
  store::StorageBackend,
};

use crate::CollectionName;

pub async fn seed<B: StorageBackend>(hub: &Arc<CollectionHub<B>>) -> String {
  let written = seed::seed_all(hub).await;
  if written.is_empty() {
    "every collection already exists; nothing seeded".to_owned()
  } else {
    format!("seeded: {}", written.join(", "))
  }
}

pub async fn summary<B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
) -> anyhow::Result<String> {
  let mut employees = Employees::open(hub).await;
  let mut projects = Projects::open(hub).await;
  let mut inventory = Inventory::open(hub).await;
  let mut clients = Clients::open(hub).await;
  let mut suppliers = Suppliers::open(hub).await;
  let mut inspections = Inspections::open(hub).await;

  let summary = Summary::compute(&Snapshot {
    employees:   employees.all(),
    projects:    projects.all(),
    inventory:   inventory.all(),
    clients:     clients.all(),
    suppliers:   suppliers.all(),
    inspections: inspections.all(),
  });

  serde_json::to_string_pretty(&summary).context("failed to serialise summary")
}

pub async fn list<B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
  collection: CollectionName,
  all: bool,
) -> anyhow::Result<String> {
  match collection {
    CollectionName::Employees => rows::<Employee, B>(hub, all).await,
    CollectionName::Projects => rows::<Project, B>(hub, all).await,
    CollectionName::Inventory => rows::<InventoryItem, B>(hub, all).await,
    CollectionName::Clients => rows::<Client, B>(hub, all).await,
    CollectionName::Suppliers => rows::<Supplier, B>(hub, all).await,
    CollectionName::Inspections => rows::<Inspection, B>(hub, all).await,
  }
}

async fn rows<R: Record, B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
  all: bool,
) -> anyhow::Result<String> {
  let mut repo = Repository::<R, B>::open(hub).await;
  let rows: Vec<&R> = if all {
    repo.all().iter().collect()
  } else {
    repo.active()
  };
  serde_json::to_string_pretty(&rows)
    .with_context(|| format!("failed to serialise {}", R::COLLECTION))
}

pub async fn stock<B: StorageBackend>(hub: &Arc<CollectionHub<B>>) -> String {
  let mut inventory = Inventory::open(hub).await;
  let mut out = String::new();
  for item in inventory.active() {
    let _ = writeln!(
      out,
      "{:<8} {:<28} {:>6} / {:<6} {:<8} {}",
      item.codigo,
      item.nombre,
      item.stock_actual,
      item.stock_minimo,
      item.unidad,
      item.stock_status(),
    );
  }
  out.trim_end().to_owned()
}

pub async fn adjust_stock<B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
  id: &str,
  quantity: &str,
) -> anyhow::Result<String> {
  let quantity = numeric::parse_i64(quantity)?;
  let item = Inventory::open(hub)
    .await
    .update(id, InventoryPatch {
      stock_actual: Some(quantity),
      ..Default::default()
    })
    .await
    .with_context(|| format!("failed to adjust stock of item {id}"))?;
  Ok(format!(
    "{} stock {} ({})",
    item.codigo,
    item.stock_actual,
    item.stock_status()
  ))
}

pub async fn remove<B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
  collection: CollectionName,
  id: &str,
) -> anyhow::Result<String> {
  match collection {
    CollectionName::Employees => remove_one::<Employee, B>(hub, id).await,
    CollectionName::Projects => remove_one::<Project, B>(hub, id).await,
    CollectionName::Inventory => remove_one::<InventoryItem, B>(hub, id).await,
    CollectionName::Clients => remove_one::<Client, B>(hub, id).await,
    CollectionName::Suppliers => remove_one::<Supplier, B>(hub, id).await,
    CollectionName::Inspections => remove_one::<Inspection, B>(hub, id).await,
  }
}

async fn remove_one<R: Record, B: StorageBackend>(
  hub: &Arc<CollectionHub<B>>,
  id: &str,
) -> anyhow::Result<String> {
  Repository::<R, B>::open(hub).await.remove(id).await?;
  Ok(format!("removed {}/{id}", R::COLLECTION))
}

#[cfg(test)]
mod tests {
  use obra_core::MemoryBackend;

  use super::*;

  async fn seeded() -> Arc<CollectionHub<MemoryBackend>> {
    let hub = Arc::new(CollectionHub::new(MemoryBackend::new()));
    seed::seed_all(&hub).await;
    hub
  }

  #[tokio::test]
  async fn seed_reports_written_keys_once() {
    let hub = Arc::new(CollectionHub::new(MemoryBackend::new()));
    assert!(seed(&hub).await.starts_with("seeded: empleados"));
    assert!(seed(&hub).await.contains("nothing seeded"));
  }

  #[tokio::test]
  async fn list_hides_removed_rows_unless_all() {
    let hub = seeded().await;
    remove(&hub, CollectionName::Suppliers, "1").await.unwrap();

    let active: serde_json::Value =
      serde_json::from_str(&list(&hub, CollectionName::Suppliers, false).await.unwrap())
        .unwrap();
    let everything: serde_json::Value =
      serde_json::from_str(&list(&hub, CollectionName::Suppliers, true).await.unwrap())
        .unwrap();
    assert_eq!(active.as_array().map(Vec::len), Some(1));
    assert_eq!(everything.as_array().map(Vec::len), Some(2));
  }

  #[tokio::test]
  async fn remove_unknown_id_fails() {
    let hub = seeded().await;
    assert!(remove(&hub, CollectionName::Inspections, "9").await.is_err());
  }

  #[tokio::test]
  async fn adjust_stock_updates_status() {
    let hub = seeded().await;
    let out = adjust_stock(&hub, "3", "1200.7").await.unwrap();
    assert_eq!(out, "LAD001 stock 1200 (normal)");

    assert!(adjust_stock(&hub, "3", "mucho").await.is_err());
    assert!(stock(&hub).await.lines().all(|l| !l.ends_with("depleted")));
  }

  #[tokio::test]
  async fn summary_is_json() {
    let hub = seeded().await;
    let json: serde_json::Value =
      serde_json::from_str(&summary(&hub).await.unwrap()).unwrap();
    assert_eq!(json["approval_rate"], 50);
    assert_eq!(json["alerts"].as_array().map(Vec::len), Some(3));
  }
}
