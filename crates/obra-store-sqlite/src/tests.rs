//! Integration tests for `SqliteStore`, in memory and on disk.

use std::sync::Arc;

use obra_core::{
  CollectionHub,
  employee::EmployeeDraft,
  repo::{Employees, Inspections},
  seed,
  store::StorageBackend,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Raw entries ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn read_missing_key_returns_none() {
  let s = store().await;
  assert!(s.read("empleados").await.unwrap().is_none());
}

#[tokio::test]
async fn write_then_read() {
  let s = store().await;
  s.write("clientes", "[]".to_owned()).await.unwrap();
  assert_eq!(s.read("clientes").await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn write_overwrites_previous_value() {
  let s = store().await;
  s.write("inventario", "[1]".to_owned()).await.unwrap();
  s.write("inventario", "[2]".to_owned()).await.unwrap();
  assert_eq!(s.read("inventario").await.unwrap().as_deref(), Some("[2]"));
  assert_eq!(s.keys().await.unwrap(), vec!["inventario"]);
}

#[tokio::test]
async fn values_are_stored_verbatim() {
  let s = store().await;
  s.write("proyectos", "{not json".to_owned()).await.unwrap();
  assert_eq!(
    s.read("proyectos").await.unwrap().as_deref(),
    Some("{not json")
  );
}

#[tokio::test]
async fn keys_are_sorted() {
  let s = store().await;
  for key in ["proyectos", "clientes", "empleados"] {
    s.write(key, "[]".to_owned()).await.unwrap();
  }
  assert_eq!(s.keys().await.unwrap(), vec![
    "clientes",
    "empleados",
    "proyectos"
  ]);
}

// ─── Through the hub ─────────────────────────────────────────────────────────

#[tokio::test]
async fn seed_all_writes_every_collection() {
  let hub = CollectionHub::new(store().await);
  assert_eq!(seed::seed_all(&hub).await.len(), 6);
  assert!(seed::seed_all(&hub).await.is_empty());
  assert_eq!(hub.backend().keys().await.unwrap().len(), 6);

  let raw = hub.backend().read("inspecciones").await.unwrap().unwrap();
  let rows: serde_json::Value = serde_json::from_str(&raw).unwrap();
  assert_eq!(rows[1]["fechaSeguimiento"], "2024-10-20");
}

#[tokio::test]
async fn corrupt_entry_loads_as_default() {
  let s = store().await;
  s.write("empleados", "not json".to_owned()).await.unwrap();
  let hub = Arc::new(CollectionHub::new(s));

  let mut employees = Employees::open(&hub).await;
  assert!(employees.all().is_empty());
}

#[tokio::test]
async fn collections_survive_reopen() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("obra.db");

  let ana_id = {
    let hub = Arc::new(CollectionHub::new(SqliteStore::open(&path).await.unwrap()));
    seed::seed_all(&hub).await;

    let mut employees = Employees::open(&hub).await;
    let ana = employees
      .add(EmployeeDraft {
        nombre: "Ana".into(),
        apellido: "Diaz".into(),
        documento: "111".into(),
        cargo: "Residente de Obra".into(),
        ..Default::default()
      })
      .await
      .unwrap();
    employees.remove("2").await.unwrap();

    let mut inspections = Inspections::open(&hub).await;
    inspections.remove("1").await.unwrap();
    ana.id
  };

  let hub = Arc::new(CollectionHub::new(SqliteStore::open(&path).await.unwrap()));
  let mut employees = Employees::open(&hub).await;
  assert_eq!(employees.all().len(), 4);
  assert_eq!(employees.all()[3].id, ana_id);
  assert!(!employees.get("2").unwrap().activo);

  let mut inspections = Inspections::open(&hub).await;
  assert_eq!(inspections.all().len(), 1);
  assert_eq!(inspections.all()[0].id, "2");
}
