//! Quality inspections.
//!
//! Inspections carry no `activo` flag: removing one discards the row.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::Validate;

use crate::{
  record::{Record, merge_patch},
  seed,
};

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
pub enum InspectionKind {
  #[default]
  Estructural,
  Acabados,
  Instalaciones,
  Seguridad,
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
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
pub enum InspectionResult {
  #[default]
  Aprobado,
  Condicional,
  Rechazado,
}

impl InspectionResult {
  /// Conditional and rejected inspections need a follow-up visit.
  pub fn needs_follow_up(self) -> bool { !matches!(self, Self::Aprobado) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
  pub id:                String,
  /// Weak reference to a [`crate::project::Project`].
  pub proyecto_id:       String,
  pub tipo:              InspectionKind,
  pub fecha:             String,
  pub inspector:         String,
  pub descripcion:       String,
  pub resultado:         InspectionResult,
  pub observaciones:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fecha_seguimiento: Option<String>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct InspectionDraft {
  #[validate(length(min = 1))]
  pub proyecto_id:       String,
  pub tipo:              InspectionKind,
  #[validate(length(min = 1))]
  pub fecha:             String,
  #[validate(length(min = 1))]
  pub inspector:         String,
  pub descripcion:       String,
  pub resultado:         InspectionResult,
  pub observaciones:     String,
  pub fecha_seguimiento: Option<String>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct InspectionPatch {
  #[validate(length(min = 1))]
  pub proyecto_id:       Option<String>,
  pub tipo:              Option<InspectionKind>,
  #[validate(length(min = 1))]
  pub fecha:             Option<String>,
  #[validate(length(min = 1))]
  pub inspector:         Option<String>,
  pub descripcion:       Option<String>,
  pub resultado:         Option<InspectionResult>,
  pub observaciones:     Option<String>,
  /// `Some(None)` clears the follow-up date.
  pub fecha_seguimiento: Option<Option<String>>,
}

impl Record for Inspection {
  const COLLECTION: &'static str = "inspecciones";

  type Draft = InspectionDraft;
  type Patch = InspectionPatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: InspectionDraft) -> Self {
    Self {
      id,
      proyecto_id: draft.proyecto_id,
      tipo: draft.tipo,
      fecha: draft.fecha,
      inspector: draft.inspector,
      descripcion: draft.descripcion,
      resultado: draft.resultado,
      observaciones: draft.observaciones,
      fecha_seguimiento: draft.fecha_seguimiento,
    }
  }

  fn apply(&mut self, patch: InspectionPatch) {
    merge_patch!(self, patch;
      proyecto_id, tipo, fecha, inspector, descripcion, resultado,
      observaciones, fecha_seguimiento,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { None }

  fn is_active(&self) -> bool { true }

  fn seed() -> Vec<Self> { seed::inspections() }
}
