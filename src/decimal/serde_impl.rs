use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::fields::Fields;
use super::packed::Decimal;

impl<F: Fields> Serialize for Decimal<F>
where
    F::Word: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.data().serialize(serializer)
        }
    }
}

impl<'de, F: Fields> Deserialize<'de> for Decimal<F>
where
    F::Word: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Decimal::from_str(&s).map_err(de::Error::custom)
        } else {
            F::Word::deserialize(deserializer).map(Decimal::from_bin)
        }
    }
}
