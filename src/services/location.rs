use crate::models::city::City;
use crate::models::country::{Country, CountryHierarchy, StateHierarchy};
use crate::models::state::State;
use crate::services::dataset::Dataset;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Read-only lookups over the geographic table.
///
/// Built once at startup and shared between requests; nothing here is
/// mutated after `new` returns.
pub struct LocationService {
    countries: Vec<Country>,
    states: HashMap<String, Vec<State>>,
    cities: HashMap<String, HashMap<String, Vec<City>>>,
}

impl LocationService {
    pub fn new(dataset: Dataset) -> Self {
        let mut countries = Vec::with_capacity(dataset.countries.len());
        let mut states = HashMap::new();
        let mut cities = HashMap::new();

        for country in dataset.countries {
            let mut country_states = Vec::with_capacity(country.states.len());
            let mut country_cities = HashMap::new();

            for state in country.states {
                country_cities.insert(
                    state.code.clone(),
                    state
                        .cities
                        .into_iter()
                        .map(|name| City { name })
                        .collect::<Vec<_>>(),
                );
                country_states.push(State {
                    code: state.code,
                    name: state.name,
                });
            }

            states.insert(country.code.clone(), country_states);
            cities.insert(country.code.clone(), country_cities);
            countries.push(Country {
                code: country.code,
                name: country.name,
            });
        }

        Self {
            countries,
            states,
            cities,
        }
    }

    /// Countries whose code is in `allowed`, sorted by name.
    pub fn countries(&self, allowed: &[String]) -> Vec<Country> {
        let mut countries: Vec<Country> = self
            .countries
            .iter()
            .filter(|country| allowed.iter().any(|code| *code == country.code))
            .cloned()
            .collect();

        countries.sort_by(|a, b| compare_names(&a.name, &b.name));

        countries
    }

    /// States of `country_code` in dataset order. Unknown codes yield an
    /// empty list; the allow-list is not consulted here.
    pub fn states_of(&self, country_code: &str) -> Vec<State> {
        self.states.get(country_code).cloned().unwrap_or_default()
    }

    pub fn cities_of(&self, country_code: &str, state_code: &str) -> Vec<City> {
        self.cities
            .get(country_code)
            .and_then(|states| states.get(state_code))
            .cloned()
            .unwrap_or_default()
    }

    pub fn hierarchy(&self, allowed: &[String]) -> Vec<CountryHierarchy> {
        self.countries(allowed)
            .into_iter()
            .map(|country| {
                let states = self
                    .states_of(&country.code)
                    .into_iter()
                    .map(|state| StateHierarchy {
                        cities: self
                            .cities_of(&country.code, &state.code)
                            .into_iter()
                            .map(|city| city.name)
                            .collect(),
                        code: state.code,
                        name: state.name,
                    })
                    .collect();

                CountryHierarchy {
                    code: country.code,
                    name: country.name,
                    states,
                }
            })
            .collect()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.values().map(Vec::len).sum()
    }

    pub fn city_count(&self) -> usize {
        self.cities
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }
}

// Case-insensitive first, raw order only to break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
