pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with [`ErrorKind::IndexOutOfRange`](crate::ErrorKind) unless
/// `index < size`.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $size:expr) => {{
        $crate::result::verify_index($index, $size)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        index_out_of_range(index, size)
    }
}

#[cold]
pub fn index_out_of_range(index: usize, size: usize) -> Result<()> {
    Err(crate::error::Error::index_out_of_range(index, size))
}
