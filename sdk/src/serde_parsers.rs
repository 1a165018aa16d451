use {
    crate::models::Direction,
    chrono::{DateTime, NaiveDate, NaiveDateTime},
    serde::{
        de::{Deserializer, MapAccess, Visitor},
        ser::{SerializeMap, Serializer},
        Deserialize,
        Serialize,
    },
    std::{fmt, marker::PhantomData},
};

/// Date format used by the backend for series keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserialize the backend's `usd_to_lbp` boolean into a [Direction].
pub fn deserialize_direction_flag<'de, D>(deserializer: D) -> Result<Direction, D::Error>
where
    D: Deserializer<'de>,
{
    let usd_to_lbp: bool = Deserialize::deserialize(deserializer)?;

    Ok(Direction::from_usd_to_lbp(usd_to_lbp))
}

/// Inverse of [deserialize_direction_flag].
pub fn serialize_direction_flag<S>(value: &Direction, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_bool(value.is_usd_to_lbp())
}

/// Deserialize a value the backend always sends but may set to `null`.
/// Unlike a plain `Option` field, a missing key is an error.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Deserialize an optional timestamp. The backend dumps naive ISO-8601
/// timestamps but RFC 3339 values with an offset are accepted and converted
/// to UTC.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;

    let Some(value) = value else {
        return Ok(None);
    };

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Some(timestamp));
    }

    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| Some(timestamp.naive_utc()))
        .map_err(serde::de::Error::custom)
}

/// Inverse of [deserialize_timestamp].
pub fn serialize_timestamp<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
        }
        None => serializer.serialize_none(),
    }
}

/// A single dated value of a [DateSeries].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DataPoint<T> {
    pub date: NaiveDate,
    pub value: T,
}

/// Ordered series of dated values.
///
/// On the wire a series is a JSON object keyed by `YYYY-MM-DD`. The entries
/// are kept in the order the server sent them.
#[derive(Clone, Debug, PartialEq)]
pub struct DateSeries<T>(Vec<DataPoint<T>>);

impl<T> Default for DateSeries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> DateSeries<T> {
    pub fn points(&self) -> &[DataPoint<T>] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint<T>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value recorded for the given date, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&T> {
        self.0
            .iter()
            .find(|point| point.date == date)
            .map(|point| &point.value)
    }

    pub fn into_points(self) -> Vec<DataPoint<T>> {
        self.0
    }
}

impl<T> FromIterator<(NaiveDate, T)> for DateSeries<T> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(date, value)| DataPoint { date, value })
                .collect(),
        )
    }
}

impl<'a, T> IntoIterator for &'a DateSeries<T> {
    type Item = &'a DataPoint<T>;
    type IntoIter = std::slice::Iter<'a, DataPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for DateSeries<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for point in &self.0 {
            map.serialize_entry(&point.date.format(DATE_FORMAT).to_string(), &point.value)?;
        }

        map.end()
    }
}

struct DateSeriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for DateSeriesVisitor<T> {
    type Value = DateSeries<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of YYYY-MM-DD dates to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut points = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((key, value)) = access.next_entry::<String, T>()? {
            let date =
                NaiveDate::parse_from_str(&key, DATE_FORMAT).map_err(serde::de::Error::custom)?;

            points.push(DataPoint { date, value });
        }

        Ok(DateSeries(points))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DateSeries<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DateSeriesVisitor(PhantomData))
    }
}
