use trilayer_macros::FromForAllUnnamedVariants;

#[derive(Debug, PartialEq)]
struct ShapeError(usize);

#[derive(Debug, PartialEq)]
struct IoLikeError(String);

#[derive(Debug, PartialEq, FromForAllUnnamedVariants)]
enum ComposedError {
    Shape(ShapeError),
    Io(IoLikeError),
    Threshold { value: u32 },
    Stale,
}

#[derive(Debug, FromForAllUnnamedVariants)]
enum BorrowingError<'a> {
    Message(&'a str),
}

fn fails_with_shape() -> Result<(), ComposedError> {
    Err(ShapeError(3))?;
    Ok(())
}

#[test]
fn should_convert_every_single_field_tuple_variant() {
    let from_shape: ComposedError = ShapeError(7).into();
    let from_io: ComposedError = IoLikeError("broken pipe".to_string()).into();

    assert_eq!(from_shape, ComposedError::Shape(ShapeError(7)));
    assert_eq!(from_io, ComposedError::Io(IoLikeError("broken pipe".to_string())));
}

#[test]
fn should_allow_the_question_mark_operator() {
    assert_eq!(fails_with_shape(), Err(ComposedError::Shape(ShapeError(3))));
}

#[test]
fn should_keep_named_and_unit_variants_usable() {
    let threshold = ComposedError::Threshold { value: 2 };
    assert_ne!(threshold, ComposedError::Stale);
}

#[test]
fn should_work_with_lifetimes() {
    let error: BorrowingError = "something went wrong".into();
    assert!(matches!(error, BorrowingError::Message("something went wrong")));
}
