/// The result of running an engine.
///
/// Unlike a plain `Result`, an engine can run into an error
/// and still produce something usable, which is what `Recover` represents.
#[derive(Debug)]
#[must_use]
pub enum Outcome<R, E> {
    Success(R),
    Failure(E),
    /// The error was recovered from with a fallback result
    Recover(R, E),
}
impl<R, E> Outcome<R, E> {
    #[inline]
    pub fn is_success(&self) -> bool {
        match *self {
            Outcome::Success(_) => true,
            Outcome::Failure(_) | Outcome::Recover(_, _) => false,
        }
    }
    #[inline]
    pub fn is_failure(&self) -> bool {
        match *self {
            Outcome::Failure(_) => true,
            Outcome::Success(_) | Outcome::Recover(_, _) => false,
        }
    }
    #[inline]
    pub fn is_recovered(&self) -> bool {
        match *self {
            Outcome::Recover(_, _) => true,
            Outcome::Success(_) | Outcome::Failure(_) => false,
        }
    }
    #[inline]
    pub fn result(&self) -> Option<&R> {
        match *self {
            Outcome::Success(ref result) | Outcome::Recover(ref result, _) => Some(result),
            Outcome::Failure(_) => None
        }
    }
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match *self {
            Outcome::Failure(ref error) | Outcome::Recover(_, ref error) => Some(error),
            Outcome::Success(_) => None
        }
    }
    pub fn map<T, F: FnOnce(R) -> T>(self, func: F) -> Outcome<T, E> {
        match self {
            Outcome::Success(result) => Outcome::Success(func(result)),
            Outcome::Failure(error) => Outcome::Failure(error),
            Outcome::Recover(result, error) => Outcome::Recover(func(result), error),
        }
    }
    /// Discard any recovered error, keeping only the result
    #[inline]
    pub fn into_result(self) -> Result<R, E> {
        match self {
            Outcome::Success(result) | Outcome::Recover(result, _) => Ok(result),
            Outcome::Failure(error) => Err(error),
        }
    }
}
impl<R, E> From<Result<R, E>> for Outcome<R, E> {
    #[inline]
    fn from(result: Result<R, E>) -> Self {
        match result {
            Ok(result) => Outcome::Success(result),
            Err(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn recovered_outcome() {
        let outcome: Outcome<u32, &str> = Outcome::Recover(3, "stale cache");
        assert!(outcome.is_recovered());
        assert!(!outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.result(), Some(&3));
        assert_eq!(outcome.error(), Some(&"stale cache"));
        let outcome = outcome.map(|value| value * 2);
        assert_eq!(outcome.into_result(), Ok(6));
    }
    #[test]
    fn from_result() {
        let success: Outcome<u32, &str> = Ok(1).into();
        assert!(success.is_success());
        assert_eq!(success.error(), None);
        let failure: Outcome<u32, &str> = Err("broken").into();
        assert!(failure.is_failure());
        assert_eq!(failure.result(), None);
        assert_eq!(failure.map(|value| value + 1).into_result(), Err("broken"));
    }
}
