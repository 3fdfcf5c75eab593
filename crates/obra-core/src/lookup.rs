//! Resolving weak references for display.
//!
//! Projects and inspections point at other records by id with no
//! existence guarantee. A dangling or deactivated target resolves to a
//! placeholder, never an error.

use crate::{
  contact::Client,
  employee::Employee,
  project::Project,
  record::Record,
};

pub const CLIENT_NOT_FOUND: &str = "Cliente no encontrado";
pub const EMPLOYEE_NOT_FOUND: &str = "Empleado no encontrado";
pub const PROJECT_NOT_FOUND: &str = "N/D";

/// The active record with exactly this id.
pub fn find_active<'a, R: Record>(rows: &'a [R], id: &str) -> Option<&'a R> {
  rows.iter().find(|r| r.is_active() && r.id() == id)
}

pub fn client_name<'a>(clients: &'a [Client], id: &str) -> &'a str {
  find_active(clients, id).map_or(CLIENT_NOT_FOUND, |c| c.nombre.as_str())
}

pub fn employee_name(employees: &[Employee], id: &str) -> String {
  find_active(employees, id)
    .map_or_else(|| EMPLOYEE_NOT_FOUND.to_owned(), Employee::full_name)
}

pub fn project_name<'a>(projects: &'a [Project], id: &str) -> &'a str {
  find_active(projects, id).map_or(PROJECT_NOT_FOUND, |p| p.nombre.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seed;

  #[test]
  fn resolves_seeded_references() {
    let clients = seed::clients();
    let employees = seed::employees();
    let projects = seed::projects();
    assert_eq!(client_name(&clients, "1"), "Inmobiliaria Los Pinos S.A.S.");
    assert_eq!(employee_name(&employees, "2"), "María González");
    assert_eq!(project_name(&projects, "2"), "Centro Comercial Plaza Norte");
  }

  #[test]
  fn dangling_ids_resolve_to_placeholders() {
    assert_eq!(client_name(&seed::clients(), "99"), CLIENT_NOT_FOUND);
    assert_eq!(employee_name(&seed::employees(), ""), EMPLOYEE_NOT_FOUND);
    assert_eq!(project_name(&[], "1"), PROJECT_NOT_FOUND);
  }

  #[test]
  fn lookup_is_exact() {
    let clients = seed::clients();
    assert_eq!(client_name(&clients, " 1"), CLIENT_NOT_FOUND);
  }

  #[test]
  fn inactive_targets_are_not_found() {
    let mut clients = seed::clients();
    clients[0].activo = false;
    assert_eq!(client_name(&clients, "1"), CLIENT_NOT_FOUND);
  }
}
