//! Abstract member contracts across a small type hierarchy.
//!
//! The cast: `Shape` declares an abstract static property `kind`, an
//! abstract instance property `label`, and an abstract method `area()`.
//! `Circle` supplies its own static `kind`; `Square` supplies nothing.

use abstrakt::engine::{StaticSlots, declare};
use abstrakt::foundation::{AbstractErrorKind, Owner, Result, Tagged, TypeTag};

static SHAPE: TypeTag = TypeTag::root("Shape");
static CIRCLE: TypeTag = TypeTag::subtype("Circle", &SHAPE);
static SQUARE: TypeTag = TypeTag::subtype("Square", &SHAPE);

/// The base contract: anything that is a shape must supply `area`.
trait Shape: Tagged + Sized {
    fn area(&self) -> Result<f64> {
        declare::method(Owner::of_instance(self), "area")
    }
}

struct Circle;

impl Tagged for Circle {
    fn type_tag() -> &'static TypeTag {
        &CIRCLE
    }
}

impl Shape for Circle {}

struct Square;

impl Tagged for Square {
    fn type_tag() -> &'static TypeTag {
        &SQUARE
    }
}

impl Shape for Square {
    fn area(&self) -> Result<f64> {
        Ok(4.0)
    }
}

/// Builds the shared static-slot table the way `Shape`'s own definition
/// would: the abstract static declaration runs once for the base type.
fn shape_statics() -> StaticSlots<String> {
    let mut slots = StaticSlots::new();
    declare::property(&mut slots, Owner::Type(&SHAPE), "kind")
        .expect("static declarations return normally");
    slots
}

/// A constructor whose field default is the abstract declaration; it can
/// only complete for types that override the default.
fn construct_labelled(runtime: &'static TypeTag, slots: &mut StaticSlots<String>) -> Result<String> {
    declare::property(slots, Owner::Instance(runtime), "label")?;
    Ok(String::new())
}

// =============================================================================
// The Full Scenario
// =============================================================================

#[test]
fn overriding_subtype_owns_its_static_value() {
    let mut slots = shape_statics();
    slots.write(&CIRCLE, "kind", Some("Circle.kind".to_owned()));

    assert_eq!(
        slots.read(&CIRCLE, "kind").unwrap(),
        Some(&"Circle.kind".to_owned())
    );
}

#[test]
fn base_and_silent_sibling_keep_tripping() {
    let mut slots = shape_statics();
    slots.write(&CIRCLE, "kind", Some("Circle.kind".to_owned()));

    let base = slots.read(&SHAPE, "kind").unwrap_err();
    assert_eq!(base.kind, AbstractErrorKind::Property);
    assert!(base.message().contains("static property Shape.kind"));

    let sibling = slots.read(&SQUARE, "kind").unwrap_err();
    assert_eq!(sibling.kind, AbstractErrorKind::Property);
}

#[test]
fn construction_fails_while_the_instance_property_is_abstract() {
    let mut slots = shape_statics();
    let err = construct_labelled(&CIRCLE, &mut slots).unwrap_err();

    assert_eq!(err.kind, AbstractErrorKind::Property);
    assert_eq!(
        err.message(),
        "Abstract instance property Circle.label must be implemented."
    );
    assert_eq!(err.name(), "AbstractPropertyError");
}

#[test]
fn unimplemented_method_names_the_runtime_type() {
    let circle = Circle;
    let err = circle.area().unwrap_err();

    assert_eq!(err.kind, AbstractErrorKind::Method);
    assert_eq!(
        err.message(),
        "Abstract instance method Circle.area() must be implemented."
    );
    assert_eq!(err.name(), "AbstractMethodError");
}

#[test]
fn overriding_method_never_touches_the_abstract_path() {
    let square = Square;
    assert_eq!(square.area().unwrap(), 4.0);
}

#[test]
fn violations_propagate_like_ordinary_errors() {
    fn total_area(shapes: &[&dyn Fn() -> Result<f64>]) -> Result<f64> {
        let mut total = 0.0;
        for shape in shapes {
            total += shape()?;
        }
        Ok(total)
    }

    let circle = Circle;
    let square = Square;
    let circle_area = || circle.area();
    let square_area = || square.area();

    let err = total_area(&[&square_area, &circle_area]).unwrap_err();
    assert_eq!(err.kind, AbstractErrorKind::Method);
}
