/// Creates a [`SimpleVector`](crate::SimpleVector) from a list of elements, or from
/// an element and a count.
///
/// ```
/// use simple_vector::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.size(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vector![7; 4];
/// assert_eq!(w.as_slice(), &[7, 7, 7, 7]);
///
/// let e: simple_vector::SimpleVector<u8> = simple_vector![];
/// assert!(e.is_empty());
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
