//! Clients and suppliers: standalone contact records.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::Validate;

use crate::{
  record::{Record, merge_patch},
  seed,
};

// ─── Client ──────────────────────────────────────────────────────────────────

/// Identity document of a client; companies register with a NIT.
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
pub enum ClientDocument {
  #[default]
  Cedula,
  Nit,
  CedulaExtranjeria,
  Pasaporte,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
  pub id:                 String,
  pub nombre:             String,
  pub tipo_documento:     ClientDocument,
  pub numero_documento:   String,
  pub telefono:           String,
  pub email:              String,
  pub direccion:          String,
  pub ciudad:             String,
  pub departamento:       String,
  pub contacto_principal: String,
  pub activo:             bool,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ClientDraft {
  #[validate(length(min = 1))]
  pub nombre:             String,
  pub tipo_documento:     ClientDocument,
  #[validate(length(min = 1))]
  pub numero_documento:   String,
  pub telefono:           String,
  pub email:              String,
  pub direccion:          String,
  pub ciudad:             String,
  pub departamento:       String,
  pub contacto_principal: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ClientPatch {
  #[validate(length(min = 1))]
  pub nombre:             Option<String>,
  pub tipo_documento:     Option<ClientDocument>,
  #[validate(length(min = 1))]
  pub numero_documento:   Option<String>,
  pub telefono:           Option<String>,
  pub email:              Option<String>,
  pub direccion:          Option<String>,
  pub ciudad:             Option<String>,
  pub departamento:       Option<String>,
  pub contacto_principal: Option<String>,
  pub activo:             Option<bool>,
}

impl Record for Client {
  const COLLECTION: &'static str = "clientes";

  type Draft = ClientDraft;
  type Patch = ClientPatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: ClientDraft) -> Self {
    Self {
      id,
      nombre: draft.nombre,
      tipo_documento: draft.tipo_documento,
      numero_documento: draft.numero_documento,
      telefono: draft.telefono,
      email: draft.email,
      direccion: draft.direccion,
      ciudad: draft.ciudad,
      departamento: draft.departamento,
      contacto_principal: draft.contacto_principal,
      activo: true,
    }
  }

  fn apply(&mut self, patch: ClientPatch) {
    merge_patch!(self, patch;
      nombre, tipo_documento, numero_documento, telefono, email, direccion,
      ciudad, departamento, contacto_principal, activo,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { Some(&mut self.activo) }

  fn is_active(&self) -> bool { self.activo }

  fn seed() -> Vec<Self> { seed::clients() }
}

// ─── Supplier ────────────────────────────────────────────────────────────────

/// What a supplier provides.
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
pub enum SupplierKind {
  #[default]
  Materiales,
  Equipos,
  Servicios,
  Transporte,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
  pub id:                 String,
  pub nombre:             String,
  pub nit:                String,
  pub tipo:               SupplierKind,
  pub telefono:           String,
  pub email:              String,
  pub direccion:          String,
  pub ciudad:             String,
  /// Rating from 0 to 5.
  pub calificacion:       u8,
  pub contacto_principal: String,
  pub activo:             bool,
}

impl Supplier {
  /// The rating drawn as five stars, e.g. `★★★★☆`.
  pub fn stars(&self) -> String {
    let filled = usize::from(self.calificacion.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
  }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct SupplierDraft {
  #[validate(length(min = 1))]
  pub nombre:             String,
  #[validate(length(min = 1))]
  pub nit:                String,
  pub tipo:               SupplierKind,
  pub telefono:           String,
  pub email:              String,
  pub direccion:          String,
  pub ciudad:             String,
  pub calificacion:       u8,
  pub contacto_principal: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct SupplierPatch {
  #[validate(length(min = 1))]
  pub nombre:             Option<String>,
  #[validate(length(min = 1))]
  pub nit:                Option<String>,
  pub tipo:               Option<SupplierKind>,
  pub telefono:           Option<String>,
  pub email:              Option<String>,
  pub direccion:          Option<String>,
  pub ciudad:             Option<String>,
  pub calificacion:       Option<u8>,
  pub contacto_principal: Option<String>,
  pub activo:             Option<bool>,
}

impl Record for Supplier {
  const COLLECTION: &'static str = "proveedores";

  type Draft = SupplierDraft;
  type Patch = SupplierPatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: SupplierDraft) -> Self {
    Self {
      id,
      nombre: draft.nombre,
      nit: draft.nit,
      tipo: draft.tipo,
      telefono: draft.telefono,
      email: draft.email,
      direccion: draft.direccion,
      ciudad: draft.ciudad,
      calificacion: draft.calificacion,
      contacto_principal: draft.contacto_principal,
      activo: true,
    }
  }

  fn apply(&mut self, patch: SupplierPatch) {
    merge_patch!(self, patch;
      nombre, nit, tipo, telefono, email, direccion, ciudad, calificacion,
      contacto_principal, activo,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { Some(&mut self.activo) }

  fn is_active(&self) -> bool { self.activo }

  fn seed() -> Vec<Self> { seed::suppliers() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stars_reflect_rating() {
    let mut supplier = Supplier::from_draft("1".into(), SupplierDraft {
      nombre: "Cementos Argos S.A.".into(),
      nit: "890900274-5".into(),
      calificacion: 4,
      ..Default::default()
    });
    assert_eq!(supplier.stars(), "★★★★☆");

    supplier.calificacion = 0;
    assert_eq!(supplier.stars(), "☆☆☆☆☆");
  }
}
