//! # Loaded Module
//!
//! A small framework for handling UI component loading states in a
//! declarative way.
//!
//! A type that implements [`LoadedElement`] can be displayed in three
//! states: loading, loaded successfully, or error. [`LoadedComponent`]
//! renders the appropriate UI for the current state so that views never
//! hand-roll loading placeholders or error markup. Conversions from Dioxus
//! reactive types ([`Resource`]) and from `Option`/`Result` values produce
//! the [`LoadedComponentInput`] driving the component.

use std::marker::PhantomData;

use dioxus::prelude::*;

use crate::utils::CheapClone;

/// Prelude re-exporting everything needed to work with loaded components.
pub mod prelude {
    pub use super::mapper::LoadedComponentInputMapper;
    pub use super::{
        FromRef, LoadedComponent, LoadedComponentInput, LoadedElement, LoadedSuccessConversionMarker,
        Loader, RefInto, SkeletonLoader, TypeCouple,
    };
}

/// A trait representing UI components that can handle loading states.
///
/// Implementors declare how they render when loaded (`element`) and what
/// stands in for them while data is pending (`place_holder`). The
/// associated `Loader` decides how the placeholder is decorated in the
/// loading and error states.
pub trait LoadedElement: Clone + PartialEq + 'static {
    /// The loader strategy to use when displaying this component in a
    /// loading or error state.
    type Loader: Loader;

    /// Renders the element to UI with the given mapper.
    ///
    /// The mapper transforms nested loaded components so that they follow
    /// the parent's state: a loading parent yields loading children.
    fn element<M: mapper::LoadedComponentInputMapper>(self, m: M) -> Element;

    /// Creates a placeholder instance to show during loading.
    fn place_holder() -> Self;
}

/// A strategy for decorating placeholder content in the loading and error
/// states.
pub trait Loader {
    /// Transforms a placeholder element into a loading representation.
    fn load(children: Element) -> Element;

    /// Transforms a placeholder element into an error representation.
    fn error(children: Element) -> Element;
}

/// A loader that displays a skeleton UI during loading.
///
/// Preserves the size and shape of the content by making the placeholder
/// invisible while an animated effect plays in its place, which avoids
/// layout shifts when the real content arrives.
pub struct SkeletonLoader;
impl Loader for SkeletonLoader {
    #[inline(always)]
    fn load(children: Element) -> Element {
        rsx! {
            span { class: "skeleton",
                span { class: "invisible inline-block", {children} }
            }
        }
    }
    #[inline(always)]
    fn error(children: Element) -> Element {
        rsx! {
            span { class: "bg-error rounded-xs relative",
                span { class: "absolute top-0 left-0 size-full text-error-content text-center",
                    "ERROR"
                }
                span { class: "invisible inline-block", {children} }
            }
        }
    }
}

/// Represents the different states of a component during loading.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedComponentInput<T: LoadedElement + Clone + PartialEq> {
    /// The component is in loading state and should display a placeholder
    Loading,
    /// The component has successfully loaded and contains the actual data
    LoadedSuccess(T),
    /// The component failed to load and contains an error message
    LoadedError(String),
}

/// A component that displays a [`LoadedElement`] according to its current
/// loading state.
///
/// Loading shows the placeholder through the element's loader; success
/// shows the element itself; error logs the message and shows the loader's
/// error representation.
#[component]
pub fn LoadedComponent<T: LoadedElement>(input: LoadedComponentInput<T>) -> Element {
    match input {
        LoadedComponentInput::Loading => {
            T::Loader::load(T::place_holder().element(mapper::Loading))
        }
        LoadedComponentInput::LoadedSuccess(c) => c.element(mapper::LoadedSuccess),
        LoadedComponentInput::LoadedError(e) => {
            log::error!("{e}");
            T::Loader::error(T::place_holder().element(mapper::LoadedError(e)))
        }
    }
}

/// Mappers propagating a parent component's loading state to nested loaded
/// components.
pub mod mapper {
    use super::{LoadedComponentInput, LoadedElement};

    /// Transforms nested elements based on the parent component state.
    pub trait LoadedComponentInputMapper {
        fn map<T: LoadedElement>(&self, t: T) -> LoadedComponentInput<T>;
    }

    /// Maps every nested element to the loading state.
    pub struct Loading;
    impl LoadedComponentInputMapper for Loading {
        fn map<T: LoadedElement>(&self, _t: T) -> LoadedComponentInput<T> {
            LoadedComponentInput::Loading
        }
    }

    /// Maps every nested element to the success state.
    pub struct LoadedSuccess;
    impl LoadedComponentInputMapper for LoadedSuccess {
        fn map<T: LoadedElement>(&self, t: T) -> LoadedComponentInput<T> {
            LoadedComponentInput::LoadedSuccess(t)
        }
    }

    /// Maps every nested element to the error state, carrying the parent
    /// error message.
    pub struct LoadedError(pub String);
    impl LoadedComponentInputMapper for LoadedError {
        fn map<T: LoadedElement>(&self, _t: T) -> LoadedComponentInput<T> {
            LoadedComponentInput::LoadedError(self.0.clone())
        }
    }
}

/// A trait for creating a value from a reference to another value.
///
/// Similar to `From`, but works on references to avoid cloning the source
/// when it doesn't need to be consumed.
pub trait FromRef<R: ?Sized> {
    fn from_ref(value: &R) -> Self;
}

/// The reciprocal of [`FromRef`].
pub trait RefInto<T> {
    fn ref_into(&self) -> T;
}
impl<R: ?Sized, T: FromRef<R>> RefInto<T> for R {
    #[inline(always)]
    fn ref_into(&self) -> T {
        T::from_ref(self)
    }
}

mod private {
    pub trait LoadedSuccessConversionMarkerSeal {}
    impl<From: ?Sized, To: super::LoadedElement + 'static> LoadedSuccessConversionMarkerSeal
        for super::TypeCouple<From, To>
    {
    }
}
pub struct TypeCouple<From: ?Sized, To: LoadedElement + 'static>(
    PhantomData<From>,
    PhantomData<To>,
);

/// Marks a `(source, element)` type couple whose [`FromRef`] conversion
/// produces the success state.
///
/// The marker keeps the success conversion from overlapping with the
/// `Option` and `Result` conversions below.
pub trait LoadedSuccessConversionMarker: private::LoadedSuccessConversionMarkerSeal {}

impl<Fr, To: LoadedElement + 'static> LoadedSuccessConversionMarker
    for TypeCouple<CheapClone<[Fr]>, To>
where
    TypeCouple<[Fr], To>: LoadedSuccessConversionMarker,
{
}

impl<T: FromRef<[U]>, U> FromRef<CheapClone<[U]>> for T {
    #[inline(always)]
    fn from_ref(value: &CheapClone<[U]>) -> Self {
        value.as_ref().ref_into()
    }
}

impl<T: LoadedElement, U: RefInto<T>> FromRef<U> for LoadedComponentInput<T>
where
    TypeCouple<U, T>: LoadedSuccessConversionMarker,
{
    #[inline(always)]
    fn from_ref(value: &U) -> Self {
        Self::LoadedSuccess(value.ref_into())
    }
}

/// `Ok` converts to the success state, `Err` to the error state with the
/// error message.
impl<T: LoadedElement, U: RefInto<LoadedComponentInput<T>>, E: core::fmt::Display>
    FromRef<Result<U, E>> for LoadedComponentInput<T>
{
    #[inline(always)]
    fn from_ref(value: &Result<U, E>) -> Self {
        match value {
            Ok(u) => u.ref_into(),
            Err(e) => Self::LoadedError(e.to_string()),
        }
    }
}

/// `Some` converts through the inner value, `None` is the loading state.
impl<T: LoadedElement, U: RefInto<LoadedComponentInput<T>>> FromRef<Option<U>>
    for LoadedComponentInput<T>
{
    #[inline(always)]
    fn from_ref(value: &Option<U>) -> Self {
        match value {
            Some(u) => u.ref_into(),
            None => Self::Loading,
        }
    }
}

/// Converts a Dioxus [`Resource`] into a [`LoadedComponentInput`], reading
/// its current value: pending resources are loading, resolved ones convert
/// through their `Option<U>` content.
impl<T: LoadedElement, U> From<Resource<U>> for LoadedComponentInput<T>
where
    Option<U>: RefInto<LoadedComponentInput<T>>,
{
    fn from(value: Resource<U>) -> Self {
        (&*value.read()).ref_into()
    }
}
