//! The executive summary: counts and totals computed over every collection.
//!
//! Never stored; always derived from the rows passed in.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
  contact::{Client, Supplier},
  employee::Employee,
  inspection::{Inspection, InspectionResult},
  inventory::{InventoryItem, StockStatus},
  project::{Project, ProjectState},
};

/// Borrowed view of every collection at one instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Snapshot<'a> {
  pub employees:   &'a [Employee],
  pub projects:    &'a [Project],
  pub inventory:   &'a [InventoryItem],
  pub clients:     &'a [Client],
  pub suppliers:   &'a [Supplier],
  pub inspections: &'a [Inspection],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
  Success,
  Info,
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
  pub level:   AlertLevel,
  pub message: String,
}

/// Totals over active rows (inspections have no flag and all count).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
  pub employees:            usize,
  pub projects:             usize,
  pub projects_in_progress: usize,
  pub inventory_items:      usize,
  pub clients:              usize,
  pub suppliers:            usize,
  pub inspections:          usize,
  pub approved_inspections: usize,
  /// Share of approved inspections, rounded to a whole percent.
  pub approval_rate:        u32,
  /// Conditional or rejected inspections.
  pub pending_inspections:  usize,
  pub low_stock:            usize,
  pub depleted_stock:       usize,
  /// Current budget of every active project in execution.
  pub committed_value:      f64,
  pub inventory_value:      f64,
  pub projects_by_state:    Vec<(ProjectState, usize)>,
  pub inspections_by_result: Vec<(InspectionResult, usize)>,
  pub alerts:               Vec<Alert>,
}

impl Summary {
  pub fn compute(snapshot: &Snapshot<'_>) -> Self {
    let projects: Vec<&Project> =
      snapshot.projects.iter().filter(|p| p.activo).collect();
    let items: Vec<&InventoryItem> =
      snapshot.inventory.iter().filter(|i| i.activo).collect();
    let inspections = snapshot.inspections;

    let in_progress: Vec<&&Project> = projects
      .iter()
      .filter(|p| p.estado == ProjectState::EnEjecucion)
      .collect();
    let approved = count_result(inspections, InspectionResult::Aprobado);
    let pending = inspections
      .iter()
      .filter(|i| i.resultado.needs_follow_up())
      .count();
    let low_stock = items
      .iter()
      .filter(|i| i.stock_status() == StockStatus::Low)
      .count();
    let depleted_stock = items
      .iter()
      .filter(|i| i.stock_status() == StockStatus::Depleted)
      .count();

    Self {
      employees: snapshot.employees.iter().filter(|e| e.activo).count(),
      projects: projects.len(),
      projects_in_progress: in_progress.len(),
      inventory_items: items.len(),
      clients: snapshot.clients.iter().filter(|c| c.activo).count(),
      suppliers: snapshot.suppliers.iter().filter(|s| s.activo).count(),
      inspections: inspections.len(),
      approved_inspections: approved,
      approval_rate: percent(approved, inspections.len()),
      pending_inspections: pending,
      low_stock,
      depleted_stock,
      committed_value: in_progress.iter().map(|p| p.presupuesto_actual).sum(),
      inventory_value: items.iter().map(|i| i.value()).sum(),
      projects_by_state: ProjectState::iter()
        .map(|state| {
          (state, projects.iter().filter(|p| p.estado == state).count())
        })
        .collect(),
      inspections_by_result: InspectionResult::iter()
        .map(|result| (result, count_result(inspections, result)))
        .collect(),
      alerts: alerts(low_stock, depleted_stock, pending),
    }
  }
}

fn count_result(inspections: &[Inspection], result: InspectionResult) -> usize {
  inspections.iter().filter(|i| i.resultado == result).count()
}

fn percent(part: usize, whole: usize) -> u32 {
  if whole == 0 {
    return 0;
  }
  (part as f64 / whole as f64 * 100.0).round() as u32
}

fn alerts(low_stock: usize, depleted_stock: usize, pending: usize) -> Vec<Alert> {
  let mut alerts = Vec::new();
  if low_stock > 0 {
    alerts.push(Alert {
      level:   AlertLevel::Warning,
      message: format!("{low_stock} items con stock bajo requieren reposición"),
    });
  }
  if depleted_stock > 0 {
    alerts.push(Alert {
      level:   AlertLevel::Error,
      message: format!(
        "{depleted_stock} items agotados necesitan restock urgente"
      ),
    });
  }
  if pending > 0 {
    alerts.push(Alert {
      level:   AlertLevel::Info,
      message: format!("{pending} inspecciones requieren seguimiento"),
    });
  }
  if alerts.is_empty() {
    alerts.push(Alert {
      level:   AlertLevel::Success,
      message: "Todas las operaciones funcionando correctamente".to_owned(),
    });
  }
  alerts
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed;

  #[test]
  fn summary_over_sample_data() {
    let employees = seed::employees();
    let projects = seed::projects();
    let inventory = seed::inventory();
    let clients = seed::clients();
    let suppliers = seed::suppliers();
    let inspections = seed::inspections();

    let summary = Summary::compute(&Snapshot {
      employees:   &employees,
      projects:    &projects,
      inventory:   &inventory,
      clients:     &clients,
      suppliers:   &suppliers,
      inspections: &inspections,
    });

    assert_eq!(summary.employees, 3);
    assert_eq!(summary.projects, 2);
    assert_eq!(summary.projects_in_progress, 2);
    assert_eq!(summary.inventory_items, 3);
    assert_eq!(summary.approval_rate, 50);
    assert_eq!(summary.pending_inspections, 1);
    assert_eq!(summary.low_stock, 1);
    assert_eq!(summary.depleted_stock, 1);
    assert_eq!(summary.committed_value, 8_000_000_000.0);
    assert_eq!(
      summary.inventory_value,
      150.0 * 25_000.0 + 25.0 * 45_000.0
    );
    assert!(summary.projects_by_state.contains(&(ProjectState::EnEjecucion, 2)));
    assert_eq!(summary.alerts.len(), 3);
    assert_eq!(summary.alerts[0].level, AlertLevel::Warning);
    assert_eq!(
      summary.alerts[0].message,
      "1 items con stock bajo requieren reposición"
    );
  }

  #[test]
  fn inactive_rows_are_left_out() {
    let mut inventory = seed::inventory();
    for item in &mut inventory {
      item.activo = false;
    }
    let summary = Summary::compute(&Snapshot {
      inventory: &inventory,
      ..Default::default()
    });
    assert_eq!(summary.inventory_items, 0);
    assert_eq!(summary.low_stock, 0);
    assert_eq!(summary.depleted_stock, 0);
  }

  #[test]
  fn empty_workspace_reports_all_clear() {
    let summary = Summary::compute(&Snapshot::default());
    assert_eq!(summary.approval_rate, 0);
    assert_eq!(summary.alerts, vec![Alert {
      level:   AlertLevel::Success,
      message: "Todas las operaciones funcionando correctamente".into(),
    }]);
  }
}
