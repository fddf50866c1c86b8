use carrental_car_ads::CarAd;
use carrental_car_ads::constants::common::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use carrental_core::{AggregateRoot, DomainResult, Entity, InvalidDealer, guard};

use crate::phone_number::PhoneNumber;

carrental_core::uuid_id! {
    /// Dealer identifier, generated when the dealer is built.
    pub struct DealerId;
}

/// Aggregate root: someone who publishes car ads.
///
/// The dealer owns its car ads as a set: adding an ad that is already present
/// (same identity) changes nothing.
#[derive(Debug, Clone)]
pub struct Dealer {
    id: DealerId,
    name: String,
    phone_number: PhoneNumber,
    car_ads: Vec<CarAd>,
}

impl Dealer {
    /// Validate and create a new dealer. Use [`DealerFactory`](crate::DealerFactory).
    pub(crate) fn new(name: String, phone_number: &str) -> DomainResult<Self> {
        guard::for_string_length::<InvalidDealer>(&name, MIN_NAME_LENGTH, MAX_NAME_LENGTH, "Name")?;
        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self {
            id: DealerId::new(),
            name,
            phone_number,
            car_ads: Vec::new(),
        })
    }

    /// Rebuild a stored dealer with its car ads. Skips validation.
    pub fn rehydrate(
        id: DealerId,
        name: String,
        phone_number: PhoneNumber,
        car_ads: Vec<CarAd>,
    ) -> Self {
        let mut dealer = Self {
            id,
            name,
            phone_number,
            car_ads: Vec::with_capacity(car_ads.len()),
        };
        for car_ad in car_ads {
            dealer.add_car_ad(car_ad);
        }
        dealer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn car_ads(&self) -> &[CarAd] {
        &self.car_ads
    }

    /// Take ownership of an ad. Returns `false` when the dealer already has it.
    pub fn add_car_ad(&mut self, car_ad: CarAd) -> bool {
        if self.car_ads.contains(&car_ad) {
            return false;
        }

        self.car_ads.push(car_ad);
        true
    }
}

impl Entity for Dealer {
    type Id = DealerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Dealer {}

carrental_core::entity_identity!(Dealer);
