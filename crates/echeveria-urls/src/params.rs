//! Typed extraction of captured path parameters.
//!
//! Captures are read positionally, in the order they appear in the route
//! definition, so `/users/:user_id/posts/:post_id` extracts as `(u64, u64)`.

use std::ops::Deref;
use std::str::FromStr;

use crate::error::{RouteError, RouteResult};
use crate::info::RoutingInfo;

/// Extracts `Self` from the captures of a matched route.
pub trait FromParams: Sized {
	/// # Errors
	///
	/// [`RouteError::PatternMismatch`] if the capture count differs,
	/// [`RouteError::InvalidField`] if a value fails to parse.
	fn from_params(info: &RoutingInfo) -> RouteResult<Self>;
}

/// Typed parameters extracted from a route.
///
/// ```ignore
/// builder.route_params("/users/:id", |Params(id): Params<u64>| user_page(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Params<T>(pub T);

impl<T> Params<T> {
	/// Unwraps the extracted value.
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> Deref for Params<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> AsRef<T> for Params<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

impl<T: FromParams> FromParams for Params<T> {
	fn from_params(info: &RoutingInfo) -> RouteResult<Self> {
		T::from_params(info).map(Params)
	}
}

/// Parses the capture at `index`.
pub(crate) fn capture_at<T>(info: &RoutingInfo, index: usize) -> RouteResult<T>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	let (name, raw) = info
		.captures()
		.get(index)
		.ok_or_else(|| RouteError::pattern_mismatch(info.path()))?;
	raw.parse::<T>()
		.map_err(|e| RouteError::invalid_field(info.path(), name, e))
}

fn expect_count(info: &RoutingInfo, expected: usize) -> RouteResult<()> {
	if info.captures().len() == expected {
		Ok(())
	} else {
		Err(RouteError::pattern_mismatch(info.path()))
	}
}

impl FromParams for () {
	fn from_params(info: &RoutingInfo) -> RouteResult<Self> {
		expect_count(info, 0)
	}
}

macro_rules! impl_from_params_for_scalar {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromParams for $ty {
				fn from_params(info: &RoutingInfo) -> RouteResult<Self> {
					expect_count(info, 1)?;
					capture_at(info, 0)
				}
			}
		)*
	};
}

impl_from_params_for_scalar! {
	i32, i64, u8, u16, u32, u64, usize, f64, bool, String,
}

macro_rules! impl_from_params_for_tuple {
	($count:expr; $($idx:tt => $ty:ident),+ $(,)?) => {
		impl<$($ty),+> FromParams for ($($ty,)+)
		where
			$($ty: FromStr,)+
			$(<$ty as FromStr>::Err: std::fmt::Display,)+
		{
			fn from_params(info: &RoutingInfo) -> RouteResult<Self> {
				expect_count(info, $count)?;
				Ok(($(capture_at::<$ty>(info, $idx)?,)+))
			}
		}
	};
}

impl_from_params_for_tuple!(1; 0 => A);
impl_from_params_for_tuple!(2; 0 => A, 1 => B);
impl_from_params_for_tuple!(3; 0 => A, 1 => B, 2 => C);
impl_from_params_for_tuple!(4; 0 => A, 1 => B, 2 => C, 3 => D);
impl_from_params_for_tuple!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
impl_from_params_for_tuple!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);

/// Validates a matched route and turns it into the resolver's input.
///
/// Any `Fn(&RoutingInfo) -> RouteResult<P>` is a parser.
pub trait RoutingParamParser: Send + Sync {
	type Param;

	fn parse(&self, info: &RoutingInfo) -> RouteResult<Self::Param>;
}

impl<F, P> RoutingParamParser for F
where
	F: Fn(&RoutingInfo) -> RouteResult<P> + Send + Sync,
{
	type Param = P;

	fn parse(&self, info: &RoutingInfo) -> RouteResult<P> {
		self(info)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pattern::PathPattern;
	use rstest::rstest;

	fn info(definition: &str, path: &str) -> RoutingInfo {
		PathPattern::compile(definition)
			.unwrap()
			.matches(path)
			.unwrap()
	}

	#[rstest]
	fn test_scalar() {
		let info = info("/users/:id", "/users/42");

		assert_eq!(u64::from_params(&info), Ok(42));
		assert_eq!(String::from_params(&info), Ok("42".to_string()));
	}

	#[rstest]
	fn test_tuple_in_pattern_order() {
		let info = info("/users/:user/posts/:post", "/users/alice/posts/7");

		let (user, post) = <(String, u32)>::from_params(&info).unwrap();

		assert_eq!(user, "alice");
		assert_eq!(post, 7);
	}

	#[rstest]
	fn test_parse_error_names_field() {
		let info = info("/users/:user/posts/:post", "/users/alice/posts/x");

		let result = <(String, u32)>::from_params(&info);

		assert_eq!(
			result,
			Err(RouteError::invalid_field(
				"/users/alice/posts/x",
				"post",
				"invalid digit found in string"
			))
		);
	}

	#[rstest]
	fn test_count_mismatch() {
		let info = info("/users/:user/posts/:post", "/users/alice/posts/7");

		assert_eq!(
			u32::from_params(&info),
			Err(RouteError::pattern_mismatch("/users/alice/posts/7"))
		);
		assert!(<()>::from_params(&info).is_err());
	}

	#[rstest]
	fn test_params_wrapper() {
		let info = info("/items/:id", "/items/9");

		let params = Params::<i64>::from_params(&info).unwrap();

		assert_eq!(*params, 9);
		assert_eq!(params.into_inner(), 9);
	}

	#[rstest]
	fn test_closure_parser() {
		let parser = |info: &RoutingInfo| info.parse::<u8>("id");
		let info = info("/items/:id", "/items/300");

		assert!(matches!(
			parser.parse(&info),
			Err(RouteError::InvalidField { .. })
		));
	}
}
