use crate::error::ValidationError;
use serde::Serialize;
use utoipa::ToSchema;

/// Menu item price in whole currency units. Only constructible inside [`Price::MIN`]..=[`Price::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 30;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Price(value))
        } else {
            Err(ValidationError::PriceOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

/// Table `restaurant_pizzas`: one pizza sold at one restaurant for a price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct RestaurantPizza {
    pub id: i64,
    pub price: i64,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}

/// Insert form. Holding a [`Price`] means the range check already passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub restaurant_id: i64,
    pub pizza_id: i64,
}
