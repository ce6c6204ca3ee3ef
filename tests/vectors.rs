//! Integration tests for the fixed-dimension vector types.

use vector3d::math::Array2;
use vector3d::{MathError, Tolerance, Vector2, Vector3, Vector4};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn construct_from_column_rows() -> anyhow::Result<()> {
    init_logging();
    let v = Vector3::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]])?;
    assert_eq!(v.components(), &[1.0, 2.0, 3.0]);
    assert_eq!(v.as_array().shape(), (3, 1));
    Ok(())
}

#[test]
fn vector3_from_two_rows_is_shape_error() {
    init_logging();
    let err = Vector3::from_rows(vec![vec![1.0], vec![2.0]]).unwrap_err();
    assert_eq!(
        err,
        MathError::Shape {
            expected: (3, 1),
            got: (2, 1)
        }
    );
}

#[test]
fn row_vector_is_rejected() {
    let row = Array2::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    assert!(matches!(Vector2::new(row), Err(MathError::Shape { .. })));
}

#[test]
fn jagged_rows_are_not_rectangular() {
    let err = Vector2::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).unwrap_err();
    assert!(matches!(err, MathError::NotRectangular { row: 1, .. }));
}

#[test]
fn constructor_takes_ownership_of_its_array() -> anyhow::Result<()> {
    let backing = Array2::from_rows(vec![vec![1.0], vec![2.0]])?;
    let mut a = Vector2::new(backing.clone())?;
    let b = Vector2::new(backing)?;
    a.multiply_scalar(10.0);
    assert_eq!(a.components(), &[10.0, 20.0]);
    assert_eq!(b.components(), &[1.0, 2.0]);
    Ok(())
}

#[test]
fn factories_are_all_ones_and_all_zero() {
    assert_eq!(Vector4::ones().components(), &[1.0; 4]);
    assert_eq!(Vector2::zeros().components(), &[0.0; 2]);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn scalar_multiply_and_divide() {
    let mut v = Vector3::from_components([1.0, -2.0, 3.0]);
    v.multiply_scalar(2.0);
    assert_eq!(v.components(), &[2.0, -4.0, 6.0]);
    v.divide_scalar(4.0);
    assert_eq!(v.components(), &[0.5, -1.0, 1.5]);
}

#[test]
fn divide_by_zero_gives_infinities() {
    let mut v = Vector2::from_components([1.0, -1.0]);
    v.divide_scalar(0.0);
    assert_eq!(v[0], f32::INFINITY);
    assert_eq!(v[1], f32::NEG_INFINITY);
}

#[test]
fn add_and_subtract_leave_operand_untouched() -> anyhow::Result<()> {
    let mut v = Vector4::from_components([1.0, 2.0, 3.0, 4.0]);
    let w = Vector4::from_components([4.0, 3.0, 2.0, 1.0]);
    v.add(&w)?;
    assert_eq!(v.components(), &[5.0; 4]);
    v.subtract(&w)?.subtract(&w)?;
    assert_eq!(v.components(), &[-3.0, -1.0, 1.0, 3.0]);
    assert_eq!(w.components(), &[4.0, 3.0, 2.0, 1.0]);
    Ok(())
}

#[test]
fn fluent_chain_scale_add_normalize() -> anyhow::Result<()> {
    let mut v = Vector2::from_components([1.0, 0.0]);
    let w = Vector2::from_components([1.0, 4.0]);
    v.multiply_scalar(2.0).add(&w)?.normalize();
    // (3, 4) / 5
    assert!(v.approx_eq(&Vector2::from_components([0.6, 0.8]), &Tolerance::default()));
    Ok(())
}

// ---------------------------------------------------------------------------
// Length / normalize
// ---------------------------------------------------------------------------

#[test]
fn length_is_euclidean_norm() {
    assert_eq!(Vector2::from_components([3.0, 4.0]).length(), 5.0);
    assert_eq!(Vector3::from_components([2.0, 3.0, 6.0]).length(), 7.0);
    assert_eq!(Vector4::from_components([1.0, 1.0, 1.0, 1.0]).length(), 2.0);
}

#[test]
fn normalize_gives_unit_length() {
    let mut v = Vector3::from_components([1.0, 2.0, 2.0]);
    v.normalize();
    assert!((v.length() - 1.0).abs() < 1e-6);
    let expected = Vector3::from_components([1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0]);
    assert!(v.approx_eq(&expected, &Tolerance::default()));
}

#[test]
fn normalizing_zero_vector_yields_nan() {
    let mut v = Vector3::zeros();
    v.normalize();
    assert!(v.components().iter().all(|c| c.is_nan()));
}

// ---------------------------------------------------------------------------
// Dot / cross
// ---------------------------------------------------------------------------

#[test]
fn dot_product_of_three_vectors() -> anyhow::Result<()> {
    let a = Vector3::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]])?;
    let b = Vector3::from_rows(vec![vec![2.0], vec![3.0], vec![4.0]])?;
    assert_eq!(a.dot(&b)?, 20.0);
    assert_eq!(b.dot(&a)?, 20.0);
    Ok(())
}

#[test]
fn dot_of_orthogonal_vectors_is_zero() -> anyhow::Result<()> {
    let a = Vector4::from_components([1.0, 0.0, 1.0, 0.0]);
    let b = Vector4::from_components([0.0, 5.0, 0.0, -2.0]);
    assert_eq!(a.dot(&b)?, 0.0);
    Ok(())
}

#[test]
fn cross_of_unit_axes() {
    let mut x = Vector3::from_components([1.0, 0.0, 0.0]);
    let y = Vector3::from_components([0.0, 1.0, 0.0]);
    x.cross(&y);
    assert_eq!(x.components(), &[0.0, 0.0, 1.0]);

    let mut y2 = y.clone();
    y2.cross(&Vector3::from_components([0.0, 0.0, 1.0]));
    assert_eq!(y2.components(), &[1.0, 0.0, 0.0]);
}

#[test]
fn cross_with_itself_is_zero() {
    let mut v = Vector3::from_components([2.0, -3.0, 5.0]);
    let same = v.clone();
    v.cross(&same);
    assert_eq!(v.components(), &[0.0, 0.0, 0.0]);
}

#[test]
fn cross_is_perpendicular_to_operands() -> anyhow::Result<()> {
    let a = Vector3::from_components([1.0, 2.0, 3.0]);
    let b = Vector3::from_components([4.0, 5.0, 6.0]);
    let mut c = a.clone();
    c.cross(&b);
    assert_eq!(c.components(), &[-3.0, 6.0, -3.0]);
    assert_eq!(c.dot(&a)?, 0.0);
    assert_eq!(c.dot(&b)?, 0.0);
    Ok(())
}

#[test]
fn display_lists_components() {
    let v = Vector3::from_components([1.0, 2.5, -3.0]);
    assert_eq!(v.to_string(), "[1, 2.5, -3]");
}
