//! Built-in sample records, written once into collections that have never
//! been stored.

use crate::{
  contact::{Client, ClientDocument, Supplier, SupplierKind},
  employee::{Employee, IdentityDocument},
  hub::CollectionHub,
  inspection::{Inspection, InspectionKind, InspectionResult},
  inventory::InventoryItem,
  project::{Project, ProjectState},
  record::Record,
  store::StorageBackend,
};

/// Seed every absent collection. Returns the keys that were written.
pub async fn seed_all<B: StorageBackend>(hub: &CollectionHub<B>) -> Vec<&'static str> {
  let mut written = Vec::new();
  if seed_one::<Employee, B>(hub).await {
    written.push(Employee::COLLECTION);
  }
  if seed_one::<Client, B>(hub).await {
    written.push(Client::COLLECTION);
  }
  if seed_one::<Project, B>(hub).await {
    written.push(Project::COLLECTION);
  }
  if seed_one::<InventoryItem, B>(hub).await {
    written.push(InventoryItem::COLLECTION);
  }
  if seed_one::<Supplier, B>(hub).await {
    written.push(Supplier::COLLECTION);
  }
  if seed_one::<Inspection, B>(hub).await {
    written.push(Inspection::COLLECTION);
  }
  written
}

pub(crate) async fn seed_one<R: Record, B: StorageBackend>(
  hub: &CollectionHub<B>,
) -> bool {
  hub.seed_if_absent(R::COLLECTION, R::seed().as_slice()).await
}

fn s(value: &str) -> String { value.to_owned() }

pub(crate) fn employees() -> Vec<Employee> {
  vec![
    Employee {
      id:             s("1"),
      nombre:         s("Carlos"),
      apellido:       s("Rodríguez"),
      documento:      s("12345678"),
      tipo_documento: IdentityDocument::Cedula,
      cargo:          s("Ingeniero Civil"),
      telefono:       s("3001234567"),
      email:          s("carlos.rodriguez@constructoracsrsas.com"),
      salario:        4_500_000.0,
      fecha_ingreso:  s("2023-01-15"),
      activo:         true,
      documentos:     Vec::new(),
    },
    Employee {
      id:             s("2"),
      nombre:         s("María"),
      apellido:       s("González"),
      documento:      s("87654321"),
      tipo_documento: IdentityDocument::Cedula,
      cargo:          s("Arquitecta"),
      telefono:       s("3009876543"),
      email:          s("maria.gonzalez@constructoracsrsas.com"),
      salario:        4_200_000.0,
      fecha_ingreso:  s("2023-02-01"),
      activo:         true,
      documentos:     Vec::new(),
    },
    Employee {
      id:             s("3"),
      nombre:         s("Luis"),
      apellido:       s("Martínez"),
      documento:      s("11223344"),
      tipo_documento: IdentityDocument::Cedula,
      cargo:          s("Maestro de Obra"),
      telefono:       s("3005566778"),
      email:          s("luis.martinez@constructoracsrsas.com"),
      salario:        2_800_000.0,
      fecha_ingreso:  s("2022-11-10"),
      activo:         true,
      documentos:     Vec::new(),
    },
  ]
}

pub(crate) fn clients() -> Vec<Client> {
  vec![
    Client {
      id:                 s("1"),
      nombre:             s("Inmobiliaria Los Pinos S.A.S."),
      tipo_documento:     ClientDocument::Nit,
      numero_documento:   s("900123456-7"),
      telefono:           s("6012345678"),
      email:              s("contacto@inmobiliarialospinos.com"),
      direccion:          s("Calle 100 #15-20"),
      ciudad:             s("Bogotá"),
      departamento:       s("Cundinamarca"),
      contacto_principal: s("Ana Pérez"),
      activo:             true,
    },
    Client {
      id:                 s("2"),
      nombre:             s("Constructora Norte Ltda."),
      tipo_documento:     ClientDocument::Nit,
      numero_documento:   s("800987654-3"),
      telefono:           s("6019876543"),
      email:              s("proyectos@constructoranorte.com"),
      direccion:          s("Carrera 7 #85-40"),
      ciudad:             s("Bogotá"),
      departamento:       s("Cundinamarca"),
      contacto_principal: s("Roberto Silva"),
      activo:             true,
    },
  ]
}

pub(crate) fn projects() -> Vec<Project> {
  vec![
    Project {
      id:                  s("1"),
      nombre:              s("Edificio Residencial Los Pinos"),
      descripcion:         s(
        "Construcción de edificio residencial de 8 pisos con 32 apartamentos",
      ),
      cliente_id:          s("1"),
      direccion:           s("Calle 127 #45-30"),
      ciudad:              s("Bogotá"),
      estado:              ProjectState::EnEjecucion,
      fecha_inicio:        s("2024-01-15"),
      fecha_fin_estimada:  s("2024-12-15"),
      presupuesto_inicial: 2_500_000_000.0,
      presupuesto_actual:  2_650_000_000.0,
      porcentaje_avance:   75,
      responsable_id:      s("1"),
      activo:              true,
    },
    Project {
      id:                  s("2"),
      nombre:              s("Centro Comercial Plaza Norte"),
      descripcion:         s("Construcción de centro comercial de 3 niveles"),
      cliente_id:          s("2"),
      direccion:           s("Autopista Norte Km 15"),
      ciudad:              s("Bogotá"),
      estado:              ProjectState::EnEjecucion,
      fecha_inicio:        s("2024-03-01"),
      fecha_fin_estimada:  s("2025-06-30"),
      presupuesto_inicial: 5_200_000_000.0,
      presupuesto_actual:  5_350_000_000.0,
      porcentaje_avance:   45,
      responsable_id:      s("2"),
      activo:              true,
    },
  ]
}

pub(crate) fn inventory() -> Vec<InventoryItem> {
  vec![
    InventoryItem {
      id:              s("1"),
      codigo:          s("CEM001"),
      nombre:          s("Cemento Portland"),
      descripcion:     s("Cemento Portland tipo I - Bulto 50kg"),
      categoria:       s("Materiales"),
      stock_actual:    150,
      stock_minimo:    50,
      unidad:          s("Bulto"),
      precio_unitario: 25_000.0,
      ubicacion:       s("Bodega A - Estante 1"),
      activo:          true,
    },
    InventoryItem {
      id:              s("2"),
      codigo:          s("VAR001"),
      nombre:          s("Varilla #4"),
      descripcion:     s("Varilla corrugada #4 - 12 metros"),
      categoria:       s("Materiales"),
      stock_actual:    25,
      stock_minimo:    30,
      unidad:          s("Unidad"),
      precio_unitario: 45_000.0,
      ubicacion:       s("Patio de Varillas"),
      activo:          true,
    },
    InventoryItem {
      id:              s("3"),
      codigo:          s("LAD001"),
      nombre:          s("Ladrillo Tolete"),
      descripcion:     s("Ladrillo tolete común"),
      categoria:       s("Materiales"),
      stock_actual:    0,
      stock_minimo:    1000,
      unidad:          s("Unidad"),
      precio_unitario: 850.0,
      ubicacion:       s("Patio Principal"),
      activo:          true,
    },
  ]
}

pub(crate) fn suppliers() -> Vec<Supplier> {
  vec![
    Supplier {
      id:                 s("1"),
      nombre:             s("Cementos Argos S.A."),
      nit:                s("890900274-5"),
      tipo:               SupplierKind::Materiales,
      telefono:           s("6014567890"),
      email:              s("ventas@argos.com"),
      direccion:          s("Carrera 15 #93-50"),
      ciudad:             s("Bogotá"),
      calificacion:       5,
      contacto_principal: s("Pedro Ramírez"),
      activo:             true,
    },
    Supplier {
      id:                 s("2"),
      nombre:             s("Ferreterías Unidas S.A.S."),
      nit:                s("900456789-2"),
      tipo:               SupplierKind::Materiales,
      telefono:           s("6017654321"),
      email:              s("comercial@ferreteriasunidas.com"),
      direccion:          s("Calle 13 #68-45"),
      ciudad:             s("Bogotá"),
      calificacion:       4,
      contacto_principal: s("Sandra López"),
      activo:             true,
    },
  ]
}

pub(crate) fn inspections() -> Vec<Inspection> {
  vec![
    Inspection {
      id:                s("1"),
      proyecto_id:       s("1"),
      tipo:              InspectionKind::Estructural,
      fecha:             s("2024-10-15"),
      inspector:         s("Carlos Rodríguez"),
      descripcion:       s("Inspección de estructura piso 6"),
      resultado:         InspectionResult::Aprobado,
      observaciones:     s("Estructura cumple con especificaciones técnicas"),
      fecha_seguimiento: None,
    },
    Inspection {
      id:                s("2"),
      proyecto_id:       s("2"),
      tipo:              InspectionKind::Seguridad,
      fecha:             s("2024-10-16"),
      inspector:         s("María González"),
      descripcion:       s("Inspección de medidas de seguridad industrial"),
      resultado:         InspectionResult::Condicional,
      observaciones:     s("Falta señalización en zona de excavación"),
      fecha_seguimiento: Some(s("2024-10-20")),
    },
  ]
}
