//! Construction projects.
//!
//! A project points at a client and a responsible employee by id only. Those
//! references are never checked; see [`crate::lookup`] for how reads resolve
//! them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::Validate;

use crate::{
  record::{Record, merge_patch},
  seed,
};

/// Project state. Any state may be set from any other.
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
pub enum ProjectState {
  #[default]
  Planificacion,
  EnEjecucion,
  Pausado,
  Completado,
  Cancelado,
}

impl ProjectState {
  pub fn label(self) -> &'static str {
    match self {
      Self::Planificacion => "Planificación",
      Self::EnEjecucion => "En Ejecución",
      Self::Pausado => "Pausado",
      Self::Completado => "Completado",
      Self::Cancelado => "Cancelado",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:                  String,
  pub nombre:              String,
  pub descripcion:         String,
  /// Weak reference to a [`crate::contact::Client`].
  pub cliente_id:          String,
  pub direccion:           String,
  pub ciudad:              String,
  pub estado:              ProjectState,
  pub fecha_inicio:        String,
  pub fecha_fin_estimada:  String,
  pub presupuesto_inicial: f64,
  pub presupuesto_actual:  f64,
  /// Progress in percent, as entered.
  pub porcentaje_avance:   i64,
  /// Weak reference to a [`crate::employee::Employee`].
  pub responsable_id:      String,
  pub activo:              bool,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ProjectDraft {
  #[validate(length(min = 1))]
  pub nombre:              String,
  pub descripcion:         String,
  #[validate(length(min = 1))]
  pub cliente_id:          String,
  pub direccion:           String,
  pub ciudad:              String,
  pub estado:              ProjectState,
  pub fecha_inicio:        String,
  pub fecha_fin_estimada:  String,
  pub presupuesto_inicial: f64,
  pub presupuesto_actual:  f64,
  pub porcentaje_avance:   i64,
  #[validate(length(min = 1))]
  pub responsable_id:      String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ProjectPatch {
  #[validate(length(min = 1))]
  pub nombre:              Option<String>,
  pub descripcion:         Option<String>,
  #[validate(length(min = 1))]
  pub cliente_id:          Option<String>,
  pub direccion:           Option<String>,
  pub ciudad:              Option<String>,
  pub estado:              Option<ProjectState>,
  pub fecha_inicio:        Option<String>,
  pub fecha_fin_estimada:  Option<String>,
  pub presupuesto_inicial: Option<f64>,
  pub presupuesto_actual:  Option<f64>,
  pub porcentaje_avance:   Option<i64>,
  #[validate(length(min = 1))]
  pub responsable_id:      Option<String>,
  pub activo:              Option<bool>,
}

impl Record for Project {
  const COLLECTION: &'static str = "proyectos";

  type Draft = ProjectDraft;
  type Patch = ProjectPatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: ProjectDraft) -> Self {
    Self {
      id,
      nombre: draft.nombre,
      descripcion: draft.descripcion,
      cliente_id: draft.cliente_id,
      direccion: draft.direccion,
      ciudad: draft.ciudad,
      estado: draft.estado,
      fecha_inicio: draft.fecha_inicio,
      fecha_fin_estimada: draft.fecha_fin_estimada,
      presupuesto_inicial: draft.presupuesto_inicial,
      presupuesto_actual: draft.presupuesto_actual,
      porcentaje_avance: draft.porcentaje_avance,
      responsable_id: draft.responsable_id,
      activo: true,
    }
  }

  fn apply(&mut self, patch: ProjectPatch) {
    merge_patch!(self, patch;
      nombre, descripcion, cliente_id, direccion, ciudad, estado, fecha_inicio,
      fecha_fin_estimada, presupuesto_inicial, presupuesto_actual,
      porcentaje_avance, responsable_id, activo,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { Some(&mut self.activo) }

  fn is_active(&self) -> bool { self.activo }

  fn seed() -> Vec<Self> { seed::projects() }
}
