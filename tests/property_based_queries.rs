//! Property-based tests for the generator and the aggregation layer
//!
//! Populations are either produced by the real generator (seeded) or built
//! from arbitrary field values, so ties and extreme values get exercised.

use censo::generator::{PersonaGenerator, CITIES, MAX_DEBT_RATIO};
use censo::persona::{BirthDate, DeclarationGroup, Persona};
use censo::queries::{self, IntoOwned, WEALTH_THRESHOLD};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn arb_persona() -> impl Strategy<Value = Persona> {
    (
        0u64..10_000,
        0usize..5,
        (1u8..=28, 1u8..=12, 1960u16..=2009),
        // coarse asset values so equal totals and ties show up
        prop_oneof![Just(0.0), Just(WEALTH_THRESHOLD), (0u32..=20).prop_map(|x| x as f64 * 1e8)],
        0.0f64..=MAX_DEBT_RATIO,
    )
        .prop_map(|(id, city, (day, month, year), assets, debt_ratio)| Persona {
            first_name: "Laura".to_string(),
            last_name: "Rojas Díaz".to_string(),
            id: id.to_string(),
            city: CITIES[city].to_string(),
            birth_date: BirthDate::new(day, month, year),
            annual_income: 10_000_000.0,
            assets,
            debts: assets * debt_ratio,
            declaration_group: DeclarationGroup::from_id(id),
        })
}

fn arb_population() -> impl Strategy<Value = Vec<Persona>> {
    prop::collection::vec(arb_persona(), 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_generated_collection_invariants(n in 1i64..400, seed in any::<u64>()) {
        let mut generator = PersonaGenerator::with_seed(seed);
        let start = generator.next_id();
        let personas = generator.generate_collection(n).unwrap();

        prop_assert_eq!(personas.len() as i64, n);

        let ids: HashSet<&str> = personas.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(ids.len(), personas.len());

        for (offset, p) in personas.iter().enumerate() {
            prop_assert_eq!(p.id.clone(), (start + offset as u64).to_string());
            prop_assert!(p.assets >= 0.0 && p.assets <= 2_000_000_000.0);
            prop_assert!(p.debts >= 0.0 && p.debts <= MAX_DEBT_RATIO * p.assets);
            prop_assert_eq!(p.declaration_group, DeclarationGroup::from_id(start + offset as u64));
        }
    }

    #[test]
    fn prop_non_positive_counts_rejected(n in i64::MIN..=0) {
        let mut generator = PersonaGenerator::with_seed(1);
        prop_assert!(generator.generate_collection(n).is_err());
    }

    #[test]
    fn prop_oldest_idempotent_under_reinsertion(personas in arb_population()) {
        let winner = queries::oldest(&personas).unwrap().clone();
        let mut extended = personas.clone();
        extended.push(winner.clone());
        prop_assert_eq!(queries::oldest(&extended).unwrap(), &winner);
    }

    #[test]
    fn prop_oldest_is_earliest_and_first(personas in arb_population()) {
        let oldest = queries::oldest(&personas).unwrap();
        let earliest = personas.iter().map(|p| p.birth_date).min().unwrap();
        prop_assert_eq!(oldest.birth_date, earliest);
        let first = personas.iter().position(|p| p.birth_date == earliest).unwrap();
        prop_assert!(std::ptr::eq(oldest, &personas[first]));
    }

    #[test]
    fn prop_wealthiest_by_city_partitions_cities(personas in arb_population()) {
        let winners = queries::wealthiest_by_city(&personas).unwrap();
        let cities: HashSet<&str> = personas.iter().map(|p| p.city.as_str()).collect();
        let keys: HashSet<&str> = winners.keys().copied().collect();
        prop_assert_eq!(keys, cities);

        for (city, winner) in &winners {
            prop_assert_eq!(winner.city.as_str(), *city);
            for p in personas.iter().filter(|p| p.city == *city) {
                prop_assert!(winner.net_worth() >= p.net_worth());
            }
        }
    }

    #[test]
    fn prop_oldest_by_city_winners_are_earliest(personas in arb_population()) {
        let winners = queries::oldest_by_city(&personas).unwrap();
        for (city, winner) in &winners {
            for p in personas.iter().filter(|p| p.city == *city) {
                prop_assert!(winner.birth_date <= p.birth_date);
            }
        }
    }

    #[test]
    fn prop_wealthiest_by_group_covers_present_groups(personas in arb_population()) {
        let winners = queries::wealthiest_by_group(&personas).unwrap();
        let groups: HashSet<DeclarationGroup> =
            personas.iter().map(|p| p.declaration_group).collect();
        prop_assert_eq!(winners.len(), groups.len());
        for (group, winner) in &winners {
            prop_assert_eq!(winner.declaration_group, *group);
        }
    }

    #[test]
    fn prop_group_by_declaration_is_partition(personas in arb_population()) {
        let groups = queries::group_by_declaration(&personas).unwrap();
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, personas.len());

        let mut seen: HashSet<*const Persona> = HashSet::new();
        for (group, members) in &groups {
            for p in members {
                prop_assert_eq!(p.declaration_group, *group);
                prop_assert!(seen.insert(*p as *const Persona));
            }
        }
    }

    #[test]
    fn prop_wealthy_listing_splits_on_threshold(personas in arb_population()) {
        let listing = queries::wealthy_by_city(&personas, WEALTH_THRESHOLD).unwrap();
        let included: HashSet<*const Persona> = listing
            .values()
            .flatten()
            .map(|p| *p as *const Persona)
            .collect();

        for p in &personas {
            let is_in = included.contains(&(p as *const Persona));
            prop_assert_eq!(is_in, p.assets > WEALTH_THRESHOLD);
        }
        for (city, members) in &listing {
            prop_assert!(!members.is_empty());
            prop_assert!(members.iter().all(|p| p.city == *city));
        }
    }

    #[test]
    fn prop_richest_city_has_maximum_total(personas in arb_population()) {
        let richest = queries::richest_city(&personas).unwrap();
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for p in &personas {
            *totals.entry(p.city.as_str()).or_default() += p.assets;
        }
        prop_assert_eq!(totals[&*richest.city], richest.total_assets);
        for total in totals.values() {
            prop_assert!(richest.total_assets >= *total);
        }
    }

    #[test]
    fn prop_owned_copy_equals_view(personas in arb_population()) {
        let view = queries::wealthiest(&personas).unwrap();
        let owned: Persona = view.into_owned();
        prop_assert_eq!(&owned, view);

        let groups = queries::group_by_declaration(&personas).unwrap();
        let owned_groups = groups.clone().into_owned();
        for (group, members) in &groups {
            let copies = &owned_groups[group];
            prop_assert_eq!(copies.len(), members.len());
            for (copy, original) in copies.iter().zip(members) {
                prop_assert_eq!(copy, *original);
            }
        }
    }
}

#[test]
fn test_wealthiest_uses_net_worth_example() {
    let mut personas = PersonaGenerator::with_seed(9).generate_collection(2).unwrap();
    personas[0].assets = 2e9;
    personas[0].debts = 0.0;
    personas[1].assets = 1e9;
    personas[1].debts = 0.9e9;

    let winner = queries::wealthiest(&personas).unwrap();
    assert!(std::ptr::eq(winner, &personas[0]));
}

#[test]
fn test_generate_three_sequential_ids() {
    let personas = PersonaGenerator::with_seed(3)
        .starting_at(77)
        .generate_collection(3)
        .unwrap();
    let ids: Vec<&str> = personas.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["77", "78", "79"]);
}
