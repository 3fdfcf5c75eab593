//! [`Repository`]: typed add/update/remove over one collection.

use std::sync::Arc;

use validator::Validate;

use crate::{
  Error,
  Result,
  collection::Collection,
  contact::{Client, Supplier},
  employee::{DocumentCategory, DocumentDraft, Employee, EmployeeDocument},
  hub::CollectionHub,
  ids,
  inspection::Inspection,
  inventory::InventoryItem,
  project::Project,
  record::Record,
  seed,
  store::StorageBackend,
};

pub type Employees<B> = Repository<Employee, B>;
pub type Projects<B> = Repository<Project, B>;
pub type Inventory<B> = Repository<InventoryItem, B>;
pub type Clients<B> = Repository<Client, B>;
pub type Suppliers<B> = Repository<Supplier, B>;
pub type Inspections<B> = Repository<Inspection, B>;

/// Convenience layer over the collection named by [`Record::COLLECTION`].
///
/// Lookups compare ids with exact string equality. A miss is reported as
/// [`Error::NotFound`] and leaves the collection untouched and unwritten.
pub struct Repository<R, B> {
  rows: Collection<R, B>,
}

impl<R: Record, B: StorageBackend> Repository<R, B> {
  /// Bind to the entity's collection, seeding it first when the hub has
  /// seeding enabled and the collection was never stored.
  pub async fn open(hub: &Arc<CollectionHub<B>>) -> Self {
    if hub.seeding() {
      seed::seed_one::<R, B>(hub).await;
    }
    Self {
      rows: Collection::bind(Arc::clone(hub), R::COLLECTION, Vec::new()).await,
    }
  }

  /// Every row in insertion order, deactivated ones included.
  pub fn all(&mut self) -> &[R] { self.rows.current() }

  pub fn active(&mut self) -> Vec<&R> {
    self.all().iter().filter(|r| r.is_active()).collect()
  }

  pub fn get(&mut self, id: &str) -> Option<&R> {
    self.all().iter().find(|r| r.id() == id)
  }

  /// Append a new record with a fresh id and return it.
  pub async fn add(&mut self, draft: R::Draft) -> Result<R> {
    draft.validate()?;
    self
      .rows
      .mutate(move |rows| {
        let id = ids::next_id(|candidate| rows.iter().any(|r| r.id() == candidate));
        let record = R::from_draft(id, draft);
        rows.push(record.clone());
        Ok(record)
      })
      .await
  }

  /// Overwrite the fields set in `patch` on the record with `id`.
  pub async fn update(&mut self, id: &str, patch: R::Patch) -> Result<R> {
    patch.validate()?;
    self
      .rows
      .mutate(move |rows| {
        let record = rows
          .iter_mut()
          .find(|r| r.id() == id)
          .ok_or_else(|| Error::not_found(R::COLLECTION, id))?;
        record.apply(patch);
        Ok(record.clone())
      })
      .await
  }

  /// Soft-delete the record with `id`, or discard it if the entity has no
  /// `activo` flag. Removing an already inactive record succeeds again.
  pub async fn remove(&mut self, id: &str) -> Result<()> {
    self
      .rows
      .mutate(|rows| {
        let index = rows
          .iter()
          .position(|r| r.id() == id)
          .ok_or_else(|| Error::not_found(R::COLLECTION, id))?;
        match rows[index].active_flag_mut() {
          Some(activo) => *activo = false,
          None => {
            rows.remove(index);
          }
        }
        Ok(())
      })
      .await
  }
}

// ─── Employee documents ──────────────────────────────────────────────────────

const DOCUMENTS: &str = "documentos";

impl<B: StorageBackend> Repository<Employee, B> {
  /// Attach a document with a fresh id to the end of the employee's list.
  pub async fn add_document(
    &mut self,
    employee_id: &str,
    draft: DocumentDraft,
  ) -> Result<EmployeeDocument> {
    draft.validate()?;
    self
      .rows
      .mutate(move |rows| {
        let employee = find_employee(rows, employee_id)?;
        let id = ids::next_id(|candidate| {
          employee.documentos.iter().any(|d| d.id == candidate)
        });
        let document = EmployeeDocument::from_draft(id, draft);
        employee.documentos.push(document.clone());
        Ok(document)
      })
      .await
  }

  pub async fn remove_document(
    &mut self,
    employee_id: &str,
    document_id: &str,
  ) -> Result<()> {
    self
      .rows
      .mutate(|rows| {
        let employee = find_employee(rows, employee_id)?;
        let index = employee
          .documentos
          .iter()
          .position(|d| d.id == document_id)
          .ok_or_else(|| Error::not_found(DOCUMENTS, document_id))?;
        employee.documentos.remove(index);
        Ok(())
      })
      .await
  }

  /// The employee's documents tagged `tipo`, in upload order. Empty when the
  /// employee does not exist.
  pub fn documents_of_kind(
    &mut self,
    employee_id: &str,
    tipo: DocumentCategory,
  ) -> Vec<&EmployeeDocument> {
    self
      .get(employee_id)
      .map(|e| e.documentos.iter().filter(|d| d.tipo == tipo).collect())
      .unwrap_or_default()
  }
}

fn find_employee<'a>(rows: &'a mut [Employee], id: &str) -> Result<&'a mut Employee> {
  rows
    .iter_mut()
    .find(|e| e.id == id)
    .ok_or_else(|| Error::not_found(Employee::COLLECTION, id))
}
