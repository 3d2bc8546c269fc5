//! Resolver abstractions for the different closure shapes a route accepts.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::RouteResult;
use crate::info::RoutingInfo;
use crate::params::{FromParams, Params, RoutingParamParser};
use crate::view::{IntoView, View};

/// Produces the view for a matched route.
///
/// Returning an error makes the router record it and try the next
/// candidate route.
pub trait RouteResolver: Send + Sync {
	fn resolve(&self, info: &RoutingInfo) -> RouteResult<View>;
}

/// Shared, type-erased resolver.
pub type SharedResolver = Arc<dyn RouteResolver>;

/// Wraps a `Fn() -> impl IntoView` closure.
pub(crate) struct NoParamsResolver<F, V> {
	resolver: F,
	_view: PhantomData<fn() -> V>,
}

impl<F, V> RouteResolver for NoParamsResolver<F, V>
where
	F: Fn() -> V + Send + Sync,
	V: IntoView,
{
	fn resolve(&self, _info: &RoutingInfo) -> RouteResult<View> {
		Ok((self.resolver)().into_view())
	}
}

/// Wraps a `Fn(&RoutingInfo) -> RouteResult<impl IntoView>` closure.
pub(crate) struct InfoResolver<F, V> {
	resolver: F,
	_view: PhantomData<fn() -> V>,
}

impl<F, V> RouteResolver for InfoResolver<F, V>
where
	F: Fn(&RoutingInfo) -> RouteResult<V> + Send + Sync,
	V: IntoView,
{
	fn resolve(&self, info: &RoutingInfo) -> RouteResult<View> {
		(self.resolver)(info).map(IntoView::into_view)
	}
}

/// Runs a [`RoutingParamParser`] before the view closure.
pub(crate) struct ParsedResolver<P, F, V> {
	parser: P,
	resolver: F,
	_view: PhantomData<fn() -> V>,
}

impl<P, F, V> RouteResolver for ParsedResolver<P, F, V>
where
	P: RoutingParamParser,
	F: Fn(P::Param) -> V + Send + Sync,
	V: IntoView,
{
	fn resolve(&self, info: &RoutingInfo) -> RouteResult<View> {
		let param = self.parser.parse(info)?;
		Ok((self.resolver)(param).into_view())
	}
}

/// Extracts [`Params<T>`] positionally before calling the view closure.
pub(crate) struct ParamsResolver<F, T, V> {
	resolver: F,
	_types: PhantomData<fn() -> (T, V)>,
}

impl<F, T, V> RouteResolver for ParamsResolver<F, T, V>
where
	F: Fn(Params<T>) -> V + Send + Sync,
	T: FromParams,
	V: IntoView,
{
	fn resolve(&self, info: &RoutingInfo) -> RouteResult<View> {
		let params = Params::<T>::from_params(info)?;
		Ok((self.resolver)(params).into_view())
	}
}

/// Parses one named capture before calling the view closure.
pub(crate) struct NamedParamResolver<F, T, V> {
	name: String,
	resolver: F,
	_types: PhantomData<fn() -> (T, V)>,
}

impl<F, T, V> RouteResolver for NamedParamResolver<F, T, V>
where
	F: Fn(T) -> V + Send + Sync,
	T: FromStr,
	T::Err: fmt::Display,
	V: IntoView,
{
	fn resolve(&self, info: &RoutingInfo) -> RouteResult<View> {
		let value = info.parse::<T>(&self.name)?;
		Ok((self.resolver)(value).into_view())
	}
}

pub(crate) fn no_params_resolver<F, V>(resolver: F) -> SharedResolver
where
	F: Fn() -> V + Send + Sync + 'static,
	V: IntoView + 'static,
{
	Arc::new(NoParamsResolver {
		resolver,
		_view: PhantomData,
	})
}

pub(crate) fn info_resolver<F, V>(resolver: F) -> SharedResolver
where
	F: Fn(&RoutingInfo) -> RouteResult<V> + Send + Sync + 'static,
	V: IntoView + 'static,
{
	Arc::new(InfoResolver {
		resolver,
		_view: PhantomData,
	})
}

pub(crate) fn parsed_resolver<P, F, V>(parser: P, resolver: F) -> SharedResolver
where
	P: RoutingParamParser + 'static,
	F: Fn(P::Param) -> V + Send + Sync + 'static,
	V: IntoView + 'static,
{
	Arc::new(ParsedResolver {
		parser,
		resolver,
		_view: PhantomData,
	})
}

pub(crate) fn params_resolver<F, T, V>(resolver: F) -> SharedResolver
where
	F: Fn(Params<T>) -> V + Send + Sync + 'static,
	T: FromParams + 'static,
	V: IntoView + 'static,
{
	Arc::new(ParamsResolver {
		resolver,
		_types: PhantomData,
	})
}

pub(crate) fn named_param_resolver<F, T, V>(name: impl Into<String>, resolver: F) -> SharedResolver
where
	F: Fn(T) -> V + Send + Sync + 'static,
	T: FromStr + 'static,
	T::Err: fmt::Display,
	V: IntoView + 'static,
{
	Arc::new(NamedParamResolver {
		name: name.into(),
		resolver,
		_types: PhantomData,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RouteError;
	use crate::pattern::PathPattern;
	use rstest::rstest;

	fn info(definition: &str, path: &str) -> RoutingInfo {
		PathPattern::compile(definition)
			.unwrap()
			.matches(path)
			.unwrap()
	}

	#[rstest]
	fn test_no_params() {
		let resolver = no_params_resolver(|| "home");

		assert_eq!(resolver.resolve(&RoutingInfo::new("/")), Ok(View::text("home")));
	}

	#[rstest]
	fn test_named_param_success_and_failure() {
		let resolver = named_param_resolver("id", |id: u32| format!("user {id}"));

		assert_eq!(
			resolver.resolve(&info("/users/:id", "/users/5")),
			Ok(View::text("user 5"))
		);
		assert!(matches!(
			resolver.resolve(&info("/users/:id", "/users/me")),
			Err(RouteError::InvalidField { .. })
		));
	}

	#[rstest]
	fn test_params_tuple() {
		let resolver = params_resolver(|Params((a, b)): Params<(u8, u8)>| format!("{}", a + b));

		assert_eq!(
			resolver.resolve(&info("/sum/:a/:b", "/sum/2/3")),
			Ok(View::text("5"))
		);
	}

	#[rstest]
	fn test_parsed_resolver_runs_parser_first() {
		let resolver = parsed_resolver(
			|info: &RoutingInfo| info.parse_query::<u32>("page").map(|p| p.unwrap_or(1)),
			|page: u32| format!("page {page}"),
		);

		assert_eq!(
			resolver.resolve(&info("/list", "/list?page=4")),
			Ok(View::text("page 4"))
		);
		assert_eq!(resolver.resolve(&info("/list", "/list")), Ok(View::text("page 1")));
	}

	#[rstest]
	fn test_info_resolver_propagates_error() {
		let resolver = info_resolver(|info: &RoutingInfo| -> RouteResult<View> {
			Err(RouteError::pattern_mismatch(info.path()))
		});

		assert_eq!(
			resolver.resolve(&RoutingInfo::new("/x")),
			Err(RouteError::pattern_mismatch("/x"))
		);
	}
}
