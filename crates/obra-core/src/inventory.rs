//! Inventory items and their derived stock status.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use validator::Validate;

use crate::{
  record::{Record, merge_patch},
  seed,
};

/// Stock level of an item, computed on read and never stored.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StockStatus {
  Normal,
  Low,
  Depleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
  pub id:              String,
  pub codigo:          String,
  pub nombre:          String,
  pub descripcion:     String,
  pub categoria:       String,
  pub stock_actual:    i64,
  pub stock_minimo:    i64,
  pub unidad:          String,
  pub precio_unitario: f64,
  pub ubicacion:       String,
  pub activo:          bool,
}

impl InventoryItem {
  /// `Depleted` at or below zero, `Low` up to and including the minimum,
  /// `Normal` above it. Negative stock counts as depleted, not low, so the
  /// item shows up in the urgent restock alert.
  pub fn stock_status(&self) -> StockStatus {
    if self.stock_actual <= 0 {
      StockStatus::Depleted
    } else if self.stock_actual <= self.stock_minimo {
      StockStatus::Low
    } else {
      StockStatus::Normal
    }
  }

  /// Stock on hand valued at the unit price.
  pub fn value(&self) -> f64 { self.stock_actual as f64 * self.precio_unitario }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct InventoryDraft {
  #[validate(length(min = 1))]
  pub codigo:          String,
  #[validate(length(min = 1))]
  pub nombre:          String,
  pub descripcion:     String,
  #[validate(length(min = 1))]
  pub categoria:       String,
  pub stock_actual:    i64,
  pub stock_minimo:    i64,
  pub unidad:          String,
  pub precio_unitario: f64,
  pub ubicacion:       String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct InventoryPatch {
  #[validate(length(min = 1))]
  pub codigo:          Option<String>,
  #[validate(length(min = 1))]
  pub nombre:          Option<String>,
  pub descripcion:     Option<String>,
  #[validate(length(min = 1))]
  pub categoria:       Option<String>,
  pub stock_actual:    Option<i64>,
  pub stock_minimo:    Option<i64>,
  pub unidad:          Option<String>,
  pub precio_unitario: Option<f64>,
  pub ubicacion:       Option<String>,
  pub activo:          Option<bool>,
}

impl Record for InventoryItem {
  const COLLECTION: &'static str = "inventario";

  type Draft = InventoryDraft;
  type Patch = InventoryPatch;

  fn id(&self) -> &str { &self.id }

  fn from_draft(id: String, draft: InventoryDraft) -> Self {
    Self {
      id,
      codigo: draft.codigo,
      nombre: draft.nombre,
      descripcion: draft.descripcion,
      categoria: draft.categoria,
      stock_actual: draft.stock_actual,
      stock_minimo: draft.stock_minimo,
      unidad: draft.unidad,
      precio_unitario: draft.precio_unitario,
      ubicacion: draft.ubicacion,
      activo: true,
    }
  }

  fn apply(&mut self, patch: InventoryPatch) {
    merge_patch!(self, patch;
      codigo, nombre, descripcion, categoria, stock_actual, stock_minimo,
      unidad, precio_unitario, ubicacion, activo,
    );
  }

  fn active_flag_mut(&mut self) -> Option<&mut bool> { Some(&mut self.activo) }

  fn is_active(&self) -> bool { self.activo }

  fn seed() -> Vec<Self> { seed::inventory() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(stock_actual: i64, stock_minimo: i64) -> InventoryItem {
    InventoryItem::from_draft("1".into(), InventoryDraft {
      codigo: "CEM001".into(),
      nombre: "Cemento".into(),
      categoria: "Materiales".into(),
      stock_actual,
      stock_minimo,
      precio_unitario: 25_000.0,
      ..Default::default()
    })
  }

  #[test]
  fn zero_stock_is_depleted() {
    assert_eq!(item(0, 50).stock_status(), StockStatus::Depleted);
  }

  #[test]
  fn negative_stock_is_depleted() {
    assert_eq!(item(-3, 50).stock_status(), StockStatus::Depleted);
  }

  #[test]
  fn stock_at_minimum_is_low() {
    assert_eq!(item(50, 50).stock_status(), StockStatus::Low);
    assert_eq!(item(1, 50).stock_status(), StockStatus::Low);
  }

  #[test]
  fn stock_above_minimum_is_normal() {
    assert_eq!(item(51, 50).stock_status(), StockStatus::Normal);
  }

  #[test]
  fn value_is_stock_times_price() {
    assert_eq!(item(4, 1).value(), 100_000.0);
  }
}
