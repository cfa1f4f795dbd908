//! Single-pass queries and aggregations over a Persona collection
//!
//! Every query returns a borrowed view into the collection. Callers that
//! need an independent copy convert the view with [`IntoOwned`].
//!
//! Ties always go to the first record encountered: a later record only
//! replaces the incumbent when it is strictly older, strictly wealthier or
//! strictly more indebted.
//!
//! Per-key results are `HashMap`s and carry no ordering guarantee.

use crate::error::{CensoError, Result};
use crate::persona::{DeclarationGroup, Persona};
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::Hash;

/// Assets above this value qualify for the wealthy listing
pub const WEALTH_THRESHOLD: f64 = 1_000_000_000.0;

/// A city together with the summed assets of its residents
#[derive(Debug, Clone, PartialEq)]
pub struct CityWealth<'a> {
    pub city: Cow<'a, str>,
    pub total_assets: f64,
}

/// Conversion of a borrowed query result into an owned copy
pub trait IntoOwned {
    type Owned;

    fn into_owned(self) -> Self::Owned;
}

impl IntoOwned for &Persona {
    type Owned = Persona;

    fn into_owned(self) -> Persona {
        self.clone()
    }
}

impl IntoOwned for &str {
    type Owned = String;

    fn into_owned(self) -> String {
        self.to_string()
    }
}

impl IntoOwned for DeclarationGroup {
    type Owned = DeclarationGroup;

    fn into_owned(self) -> DeclarationGroup {
        self
    }
}

impl<T: IntoOwned> IntoOwned for Vec<T> {
    type Owned = Vec<T::Owned>;

    fn into_owned(self) -> Self::Owned {
        self.into_iter().map(IntoOwned::into_owned).collect()
    }
}

impl<K, V> IntoOwned for HashMap<K, V>
where
    K: IntoOwned,
    K::Owned: Eq + Hash,
    V: IntoOwned,
{
    type Owned = HashMap<K::Owned, V::Owned>;

    fn into_owned(self) -> Self::Owned {
        self.into_iter()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

impl IntoOwned for CityWealth<'_> {
    type Owned = CityWealth<'static>;

    fn into_owned(self) -> CityWealth<'static> {
        CityWealth {
            city: Cow::Owned(self.city.into_owned()),
            total_assets: self.total_assets,
        }
    }
}

fn ensure_not_empty(personas: &[Persona]) -> Result<()> {
    if personas.is_empty() {
        Err(CensoError::EmptyCollection)
    } else {
        Ok(())
    }
}

fn is_older(candidate: &Persona, incumbent: &Persona) -> bool {
    candidate.birth_date < incumbent.birth_date
}

fn is_wealthier(candidate: &Persona, incumbent: &Persona) -> bool {
    candidate.net_worth() > incumbent.net_worth()
}

fn is_more_indebted(candidate: &Persona, incumbent: &Persona) -> bool {
    candidate.debts > incumbent.debts
}

/// Running best over the whole collection
fn best<'a>(
    personas: &'a [Persona],
    replaces: impl Fn(&Persona, &Persona) -> bool,
) -> Result<&'a Persona> {
    let (first, rest) = personas.split_first().ok_or(CensoError::EmptyCollection)?;
    Ok(rest.iter().fold(first, |incumbent, candidate| {
        if replaces(candidate, incumbent) {
            candidate
        } else {
            incumbent
        }
    }))
}

/// Running best per key; the first record seen for a key seeds its entry
fn best_by_key<'a, K>(
    personas: &'a [Persona],
    key: impl Fn(&'a Persona) -> K,
    replaces: impl Fn(&Persona, &Persona) -> bool,
) -> Result<HashMap<K, &'a Persona>>
where
    K: Eq + Hash,
{
    ensure_not_empty(personas)?;
    let mut winners: HashMap<K, &Persona> = HashMap::new();
    for persona in personas {
        winners
            .entry(key(persona))
            .and_modify(|incumbent| {
                if replaces(persona, *incumbent) {
                    *incumbent = persona;
                }
            })
            .or_insert(persona);
    }
    Ok(winners)
}

fn city_of(persona: &Persona) -> &str {
    persona.city.as_str()
}

/// Oldest person nationwide (earliest birth date)
pub fn oldest(personas: &[Persona]) -> Result<&Persona> {
    best(personas, is_older)
}

/// Oldest person in each city
pub fn oldest_by_city(personas: &[Persona]) -> Result<HashMap<&str, &Persona>> {
    best_by_key(personas, city_of, is_older)
}

/// Person with the highest net worth nationwide
pub fn wealthiest(personas: &[Persona]) -> Result<&Persona> {
    best(personas, is_wealthier)
}

/// Person with the highest net worth in each city
pub fn wealthiest_by_city(personas: &[Persona]) -> Result<HashMap<&str, &Persona>> {
    best_by_key(personas, city_of, is_wealthier)
}

/// Person with the highest net worth in each declaration group
pub fn wealthiest_by_group(
    personas: &[Persona],
) -> Result<HashMap<DeclarationGroup, &Persona>> {
    best_by_key(personas, |p| p.declaration_group, is_wealthier)
}

/// Person with the largest debts nationwide
pub fn most_indebted(personas: &[Persona]) -> Result<&Persona> {
    best(personas, is_more_indebted)
}

/// Partition the collection by declaration group, keeping encounter order
pub fn group_by_declaration(
    personas: &[Persona],
) -> Result<HashMap<DeclarationGroup, Vec<&Persona>>> {
    ensure_not_empty(personas)?;
    let mut groups: HashMap<DeclarationGroup, Vec<&Persona>> = HashMap::new();
    for persona in personas {
        groups
            .entry(persona.declaration_group)
            .or_default()
            .push(persona);
    }
    Ok(groups)
}

/// Sum of assets (not net worth) per city
pub fn city_totals(personas: &[Persona]) -> Result<HashMap<&str, f64>> {
    ensure_not_empty(personas)?;
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for persona in personas {
        *totals.entry(city_of(persona)).or_insert(0.0) += persona.assets;
    }
    Ok(totals)
}

/// City with the strictly highest aggregate assets
///
/// Among equal totals the winner is whichever the map yields first, which
/// is unspecified.
pub fn richest_city(personas: &[Persona]) -> Result<CityWealth<'_>> {
    let totals = city_totals(personas)?;
    let mut entries = totals.into_iter();
    let (city, total_assets) = entries.next().ok_or(CensoError::EmptyCollection)?;
    let (city, total_assets) = entries.fold((city, total_assets), |incumbent, candidate| {
        if candidate.1 > incumbent.1 {
            candidate
        } else {
            incumbent
        }
    });
    Ok(CityWealth {
        city: Cow::Borrowed(city),
        total_assets,
    })
}

/// Persons whose assets exceed `threshold`, grouped by city in encounter order
pub fn wealthy_by_city(
    personas: &[Persona],
    threshold: f64,
) -> Result<HashMap<&str, Vec<&Persona>>> {
    ensure_not_empty(personas)?;
    let mut listing: HashMap<&str, Vec<&Persona>> = HashMap::new();
    for persona in personas.iter().filter(|p| p.assets > threshold) {
        listing.entry(city_of(persona)).or_default().push(persona);
    }
    Ok(listing)
}

/// Record at a zero-based position
pub fn get(personas: &[Persona], index: usize) -> Result<&Persona> {
    ensure_not_empty(personas)?;
    personas.get(index).ok_or_else(|| {
        CensoError::InvalidInput(format!(
            "índice {} fuera de rango (0-{})",
            index,
            personas.len() - 1
        ))
    })
}

/// Linear search by id
pub fn find_by_id<'a>(personas: &'a [Persona], id: &str) -> Result<&'a Persona> {
    ensure_not_empty(personas)?;
    personas
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CensoError::InvalidInput(format!("no existe persona con id {}", id)))
}
