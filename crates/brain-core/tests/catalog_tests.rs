// Host-side tests for catalog validation at startup.

use brain_core::*;

fn valid(name: &str) -> RegionBuilder {
    RegionBuilder::new()
        .name(name)
        .color(0x5599ff)
        .position(0.0, 0.0, 0.0)
        .scale(1.0, 1.0, 1.0)
}

#[test]
fn missing_fields_are_fatal() {
    let no_name = RegionBuilder::new()
        .color(0x5599ff)
        .position(0.0, 0.0, 0.0)
        .scale(1.0, 1.0, 1.0);
    let err = Catalog::from_builders(vec![no_name]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::MissingField {
            index: 0,
            field: "name"
        }
    );
    assert_eq!(err.to_string(), "region #0 is missing required field `name`");

    let no_color = RegionBuilder::new()
        .name("X")
        .position(0.0, 0.0, 0.0)
        .scale(1.0, 1.0, 1.0);
    assert!(matches!(
        Catalog::from_builders(vec![valid("A"), no_color]),
        Err(CatalogError::MissingField {
            index: 1,
            field: "color"
        })
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = Catalog::from_builders(vec![valid("Cerebellum"), valid("Cerebellum")]).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateName {
            name: "Cerebellum".to_owned()
        }
    );
}

#[test]
fn opacity_must_be_in_unit_interval() {
    assert!(Catalog::from_builders(vec![valid("A").opacity(1.0)]).is_ok());
    assert!(Catalog::from_builders(vec![valid("A").opacity(0.7)]).is_ok());
    assert!(matches!(
        Catalog::from_builders(vec![valid("A").opacity(0.0)]),
        Err(CatalogError::InvalidOpacity { .. })
    ));
    assert!(matches!(
        Catalog::from_builders(vec![valid("A").opacity(1.5)]),
        Err(CatalogError::InvalidOpacity { .. })
    ));
    assert!(matches!(
        Catalog::from_builders(vec![valid("A").opacity(f32::NAN)]),
        Err(CatalogError::InvalidOpacity { .. })
    ));
}

#[test]
fn degenerate_geometry_is_rejected() {
    assert!(matches!(
        Catalog::from_builders(vec![valid("Flat").scale(1.0, 0.0, 1.0)]),
        Err(CatalogError::InvalidScale { .. })
    ));
    assert!(matches!(
        Catalog::from_builders(vec![valid("Lost").position(f32::INFINITY, 0.0, 0.0)]),
        Err(CatalogError::InvalidPosition { .. })
    ));
    assert!(matches!(
        Catalog::from_builders(vec![valid("   ")]),
        Err(CatalogError::EmptyName { index: 0 })
    ));
}

#[test]
fn lookup_by_name_follows_catalog_order() {
    let catalog = Catalog::from_builders(vec![valid("A"), valid("B"), valid("C")]).unwrap();
    assert_eq!(catalog.index_of("C"), Some(2));
    assert_eq!(catalog.index_of("D"), None);
    let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}
