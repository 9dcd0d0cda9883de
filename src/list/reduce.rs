use super::List;
use crate::value::{Type, Value};
use crate::{Error, Result};

impl List {
    /// Every element as an `i64`, or `TypeMismatch` at the first non-Int.
    fn ints(&self) -> Result<impl Iterator<Item = i64> + '_> {
        if let Some(bad) = self.items.iter().find(|item| !item.is_int()) {
            return Err(Error::type_mismatch(Type::Int, bad.type_of()));
        }
        Ok(self.items.iter().filter_map(Value::as_int))
    }

    /// Every element widened to `f64`; Ints and Floats may be mixed.
    fn numbers(&self) -> Result<impl Iterator<Item = f64> + '_> {
        if let Some(bad) = self.items.iter().find(|item| !item.is_numeric()) {
            return Err(Error::type_mismatch(Type::Float, bad.type_of()));
        }
        Ok(self.items.iter().filter_map(Value::as_number))
    }

    fn non_empty(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(Error::EmptyList);
        }
        Ok(())
    }

    /// Sum of an all-Int list, wrapping on overflow. `0` when empty.
    pub fn int_sum(&self) -> Result<i64> {
        Ok(self.ints()?.fold(0i64, i64::wrapping_add))
    }

    /// Product of an all-Int list, wrapping on overflow. `1` when empty.
    pub fn int_prod(&self) -> Result<i64> {
        Ok(self.ints()?.fold(1i64, i64::wrapping_mul))
    }

    pub fn int_min(&self) -> Result<i64> {
        self.non_empty()?;
        self.ints()?.min().ok_or(Error::EmptyList)
    }

    pub fn int_max(&self) -> Result<i64> {
        self.non_empty()?;
        self.ints()?.max().ok_or(Error::EmptyList)
    }

    pub fn sum(&self) -> Result<f64> {
        Ok(self.numbers()?.sum())
    }

    pub fn prod(&self) -> Result<f64> {
        Ok(self.numbers()?.product())
    }

    pub fn avg(&self) -> Result<f64> {
        self.non_empty()?;
        let total: f64 = self.numbers()?.sum();
        Ok(total / self.items.len() as f64)
    }

    pub fn min(&self) -> Result<f64> {
        self.non_empty()?;
        Ok(self.numbers()?.fold(f64::INFINITY, f64::min))
    }

    pub fn max(&self) -> Result<f64> {
        self.non_empty()?;
        Ok(self.numbers()?.fold(f64::NEG_INFINITY, f64::max))
    }
}
