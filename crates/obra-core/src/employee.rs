//! Employees and the documents filed against them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::Validate;

use crate::{
  record::{Record, merge_patch},
  seed,
};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Kind of personal identity document an employee is registered with.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentityDocument {
  #[default]
  Cedula,
  CedulaExtranjeria,
  Pasaporte,
}

/// Category tag of an employee document.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentCategory {
  Arl,
  Eps,
  CajaCompensacion,
  Pensiones,
  CuentaBancaria,
  Contrato,
  Cedula,
  Anexos,
}

impl DocumentCategory {
  pub fn label(self) -> &'static str {
    match self {
      Self::Arl => "ARL",
      Self::Eps => "EPS",
      Self::CajaCompensacion => "Caja de Compensación",
      Self::Pensiones => "Pensiones",
      Self::CuentaBancaria => "Cuenta Bancaria",
      Self::Contrato => "Contrato",
      Self::Cedula => "Cédula",
      Self::Anexos => "Anexos",
    }
  }
}

// ─── Documents ───────────────────────────────────────────────────────────────

/// A file attached to an employee. The payload is already text-encoded by
/// the uploader (a data URL); it is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDocument {
  pub id:           String,
  pub tipo:         DocumentCategory,
  pub nombre:       String,
  pub archivo:      String,
  pub fecha_subida: DateTime<Utc>,
  /// Size of the original file in bytes.
  #[serde(rename = "tamaño")]
  pub tamano:       u64,
  /// MIME type of the original file.
  pub tipo_archivo: String,
}

/// Input to [`crate::repo::Employees::add_document`].
#[derive(Debug, Clone, Validate)]
pub struct DocumentDraft {
  pub tipo:         DocumentCategory,
  #[validate(length(min = 1))]
  pub nombre:       String,
  pub archivo:      String,
  pub fecha_subida: DateTime<Utc>,
  pub tamano:       u64,
  pub tipo_archivo: String,
}

impl DocumentDraft {
  /// A draft stamped with the current time.
  pub fn new(
    tipo: DocumentCategory,
    nombre: impl Into<String>,
    archivo: impl Into<String>,
    tamano: u64,
    tipo_archivo: impl Into<String>,
  ) -> Self {
    Self {
      tipo,
      nombre: nombre.into(),
      archivo: archivo.into(),
      fecha_subida: Utc::now(),
      tamano,
      tipo_archivo: tipo_archivo.into(),
    }
  }
}

impl EmployeeDocument {
  pub(crate) fn from_draft(id: String, draft: DocumentDraft) -> Self {
    Self {
      id,
      tipo: draft.tipo,
      nombre: draft.nombre,
      archivo: draft.archivo,
      fecha_subida: draft.fecha_subida,
      tamano: draft.tamano,
      tipo_archivo: draft.tipo_archivo,
    }
  }
}

// ─── Employee ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:             String,
  pub nombre:         String,
  pub apellido:       String,
  pub documento:      String,
  pub tipo_documento: IdentityDocument,
  pub cargo:          String,
  pub telefono:       String,
  pub email:          String,
  pub salario:        f64,
  /// Hire date as entered (`YYYY-MM-DD`).
  pub fecha_ingreso:  String,
  pub activo:         bool,
  /// Owned documents in upload order. Older rows may lack the field or
  /// hold `null`; both read as empty.
  #[serde(default, deserialize_with = "null_as_empty")]
  pub documentos:     Vec<EmployeeDocument>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Employee {
  pub fn full_name(&self) -> String { format!("{} {}", self.nombre, self.apellido) }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmployeeDraft {
  #[validate(length(min = 1))]
  pub nombre:         String,
  #[validate(length(min = 1))]
  pub apellido:       String,
  #[validate(length(min = 1))]
  pub documento:      String,
  pub tipo_documento: IdentityDocument,
  #[validate(length(min = 1))]
  pub cargo:          String,
  pub telefono:       String,
  pub email:          String,
  pub salario:        f64,
  pub fecha_ingreso:  String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmployeePatch {
  #[validate(length(min = 1))]
  pub nombre:         Option<String>,
  #[validate(length(min = 1))]
  pub apellido:       Option<String>,
  #[validate(length(min = 1))]
  pub documento:      Option<String>,
  pub tipo_documento: Option<IdentityDocument>,
  #[validate(length(min = 1))]
  pub cargo:          Option<String>,
  pub telefono:       Option<String>,
  pub email:          Option<String>,
  pub salario:        Option<f64>,
  pub fecha_ingreso:  Option<String>,
  pub activo:         Option<bool>,
}

impl Record for Employee {
  const COLLECTION: &'static str = "empleados";

  type Draft = EmployeeDraft;
  type Patch = EmployeePatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: EmployeeDraft) -> Self {
    Self {
      id,
      nombre: draft.nombre,
      apellido: draft.apellido,
      documento: draft.documento,
      tipo_documento: draft.tipo_documento,
      cargo: draft.cargo,
      telefono: draft.telefono,
      email: draft.email,
      salario: draft.salario,
      fecha_ingreso: draft.fecha_ingreso,
      activo: true,
      documentos: Vec::new(),
    }
  }

  fn apply(&mut self, patch: EmployeePatch) {
    merge_patch!(self, patch;
      nombre, apellido, documento, tipo_documento, cargo, telefono, email,
      salario, fecha_ingreso, activo,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { Some(&mut self.activo) }

  fn is_active(&self) -> bool { self.activo }

  fn seed() -> Vec<Self> { seed::employees() }
}
