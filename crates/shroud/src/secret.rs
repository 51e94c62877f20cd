//! The opaque wrapper that keeps a sensitive value out of formatted and
//! serialized output.

use std::any::type_name;
use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Holds a sensitive value (a token, a password, a key) that can be read,
/// replaced, and deserialized, but never escapes through display formatting,
/// debug formatting, or serialization of a containing value.
///
/// Serializing a secret emits the zero value of `T` (its [`Default`]), so the
/// *shape* of `T` is visible in the output while its content never is: a
/// struct serializes as its field skeleton at zero values, collections as
/// their empty form. [`Display`] and [`Debug`] print only a type descriptor.
///
/// A secret declared as a struct field starts out uninitialized until a value
/// is sealed into it by [`Secret::new`] or by deserialization. Reading or
/// writing an uninitialized secret is a bug in the surrounding code; the plain
/// accessors treat it as one and panic, while [`try_get`](Secret::try_get) and
/// [`try_set`](Secret::try_set) surface it as an error instead.
///
/// This is not secure memory management: the value is not zeroed on drop and
/// nothing stops a caller from reading it out and logging it.
pub struct Secret<T> {
    sealed: Option<Box<Sealed<T>>>,
}

impl<T> Secret<T> {
    /// Seals `value` into a new, initialized secret.
    pub fn new(value: T) -> Self {
        Self {
            sealed: Some(Box::new(Sealed { value })),
        }
    }

    /// Borrows the hidden value.
    ///
    /// # Panics
    ///
    /// Panics if the secret was never initialized.
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Borrows the hidden value, or reports that the secret was never
    /// initialized.
    pub fn try_get(&self) -> Result<&T, Error> {
        self.sealed
            .as_deref()
            .map(Sealed::get)
            .ok_or(Error::Uninitialized)
    }

    /// Replaces the hidden value in place.
    ///
    /// # Panics
    ///
    /// Panics if the secret was never initialized.
    pub fn set(&mut self, value: T) {
        if let Err(err) = self.try_set(value) {
            panic!("{err}");
        }
    }

    /// Replaces the hidden value in place, or reports that the secret was
    /// never initialized.
    pub fn try_set(&mut self, value: T) -> Result<(), Error> {
        self.sealed
            .as_deref_mut()
            .ok_or(Error::Uninitialized)?
            .set(value);
        Ok(())
    }

    /// Whether a value has been sealed into this secret yet.
    pub fn is_initialized(&self) -> bool {
        self.sealed.is_some()
    }
}

impl<T> Default for Secret<T> {
    /// The uninitialized secret, as a struct field reads before decoding.
    fn default() -> Self {
        Self { sealed: None }
    }
}

impl<T> From<T> for Secret<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone> Clone for Secret<T> {
    fn clone(&self) -> Self {
        // every secret owns its cell outright, so a clone gets a fresh one
        Self {
            sealed: self
                .sealed
                .as_deref()
                .map(|sealed| Box::new(Sealed { value: sealed.value.clone() })),
        }
    }
}

/// Writes the type descriptor of a secret to a formatter
fn write_descriptor<T>(f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Secret<{}>", type_name::<T>())
}

impl<T> Display for Secret<T> {
    /// Prints only `Secret<{type}>`, regardless of state or content.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_descriptor::<T>(f)
    }
}

impl<T> Debug for Secret<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_descriptor::<T>(f)
    }
}

impl<T: Serialize + Default> Serialize for Secret<T> {
    /// Serializes the zero value of `T`, irrespective of the stored value and
    /// of whether the secret is initialized.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        T::default().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Secret<T> {
    /// Decodes a `T` by its own rules, then seals it into a fresh cell. A
    /// decode error propagates verbatim.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

/// Owns the raw value behind the module's privacy boundary; nothing outside
/// this module can name the field, so generic field-walking code never reaches
/// it. Boxed so that every decode replaces the cell wholesale.
struct Sealed<T> {
    value: T,
}

impl<T> Sealed<T> {
    fn get(&self) -> &T {
        &self.value
    }

    fn set(&mut self, value: T) {
        self.value = value;
    }
}
