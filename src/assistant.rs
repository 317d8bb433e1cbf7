//! The scripted search assistant.
//!
//! A linear, rule-based conversation: city, then accommodation type, then
//! budget. There is no model behind it, only case-insensitive matching
//! against the catalog vocabulary, so it is fully deterministic and runs
//! without any I/O. Once the budget is known the assistant searches the
//! catalog with the core engine and hands back a [`Filters`] the caller
//! can encode and navigate to.

use crate::filters::{filter_listings, Filters};
use crate::model::{Listing, ListingType};

const RESULT_LIMIT: usize = 5;
const RESTART_SUGGESTION: &str = "Start over";

/// One bot turn: the message, optional one-tap suggestion chips, the top
/// matching listings once a search ran, and the filter state to browse
/// with when the conversation completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub suggestions: Vec<String>,
    pub results: Vec<Listing>,
    pub redirect: Option<Filters>,
}

impl Reply {
    fn say(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            text: text.into(),
            suggestions,
            results: Vec::new(),
            redirect: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    City,
    Kind,
    Budget,
    Done,
}

/// Conversation state over a fixed catalog slice.
#[derive(Debug)]
pub struct Assistant<'a> {
    listings: &'a [Listing],
    stage: Stage,
    city: Option<String>,
    kind: Option<ListingType>,
}

impl<'a> Assistant<'a> {
    pub fn new(listings: &'a [Listing]) -> Self {
        Self {
            listings,
            stage: Stage::City,
            city: None,
            kind: None,
        }
    }

    /// Opening message, with the known cities as suggestions.
    pub fn greeting(&self) -> Reply {
        Reply::say(
            "Hi! I can help you find the right place to stay. Which city are you looking at?",
            self.city_suggestions(),
        )
    }

    /// Forgets everything gathered so far and returns to the first stage.
    pub fn reset(&mut self) -> Reply {
        self.stage = Stage::City;
        self.city = None;
        self.kind = None;
        self.greeting()
    }

    /// Advances the conversation with one user message.
    ///
    /// Input that does not match the current question re-asks it; the
    /// [`RESTART_SUGGESTION`] chip text restarts from any stage.
    pub fn respond(&mut self, input: &str) -> Reply {
        if input.trim().eq_ignore_ascii_case(RESTART_SUGGESTION) {
            return self.reset();
        }
        let lower = input.to_lowercase();

        match self.stage {
            Stage::City => match self.match_city(&lower) {
                Some(city) => {
                    self.city = Some(city.clone());
                    self.stage = Stage::Kind;
                    Reply::say(
                        format!("Great, {}! What kind of place are you after?", city),
                        kind_suggestions(),
                    )
                }
                None => Reply::say(
                    "I didn't catch the city. Could you pick one of the places we cover?",
                    self.city_suggestions(),
                ),
            },
            Stage::Kind => match match_kind(&lower) {
                Some(kind) => {
                    self.kind = Some(kind);
                    self.stage = Stage::Budget;
                    Reply::say(
                        "What is your budget per night?",
                        vec![
                            "€100".to_string(),
                            "€200".to_string(),
                            "€300".to_string(),
                            "€500".to_string(),
                        ],
                    )
                }
                None => Reply::say("What kind of place are you after?", kind_suggestions()),
            },
            Stage::Budget => match first_number(input) {
                Some(budget) => {
                    self.stage = Stage::Done;
                    self.search(budget)
                }
                None => Reply::say(
                    "Give me a number and I'll use it as your nightly budget.",
                    vec!["€100".to_string(), "€200".to_string(), "€300".to_string()],
                ),
            },
            Stage::Done => Reply::say(
                "I can run another search if you like. Want to start over?",
                vec![RESTART_SUGGESTION.to_string()],
            ),
        }
    }

    fn search(&self, budget: u32) -> Reply {
        let filters = Filters {
            query: self.city.clone(),
            kind: self.kind,
            max_price: Some(budget),
            ..Filters::default()
        };
        let mut matches = filter_listings(self.listings, &filters);
        matches.truncate(RESULT_LIMIT);

        if matches.is_empty() {
            return Reply::say(
                "I couldn't find anything matching all of that. Want to widen the search?",
                vec![RESTART_SUGGESTION.to_string()],
            );
        }

        let city = self.city.as_deref().unwrap_or_default();
        Reply {
            text: format!(
                "Found {} place(s) in {} within your budget. Taking you to the results…",
                matches.len(),
                city
            ),
            suggestions: Vec::new(),
            results: matches,
            redirect: Some(filters),
        }
    }

    fn match_city(&self, lower_input: &str) -> Option<String> {
        let mut cities: Vec<&str> = self.listings.iter().map(|l| l.city.as_str()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities
            .into_iter()
            .find(|city| lower_input.contains(&city.to_lowercase()))
            .map(|city| city.to_string())
    }

    fn city_suggestions(&self) -> Vec<String> {
        let mut cities: Vec<String> = self.listings.iter().map(|l| l.city.clone()).collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }
}

fn kind_suggestions() -> Vec<String> {
    ListingType::ALL
        .iter()
        .map(|kind| kind.label().to_string())
        .collect()
}

fn match_kind(lower_input: &str) -> Option<ListingType> {
    ListingType::ALL
        .into_iter()
        .find(|kind| lower_input.contains(kind.as_str()))
}

/// First run of ASCII digits in the input, if any.
fn first_number(input: &str) -> Option<u32> {
    let digits: String = input
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, city: &str, kind: ListingType, price: f64) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            city: city.to_string(),
            country: "France".to_string(),
            kind,
            price,
            rating: 4.5,
            reviews: 50,
            rooms: 2,
            lat: 0.0,
            lng: 0.0,
            cover: format!("cover-{}", id),
            description: None,
        }
    }

    fn catalog() -> Vec<Listing> {
        vec![
            listing("1", "Paris", ListingType::Apartment, 150.0),
            listing("2", "Paris", ListingType::Studio, 90.0),
            listing("3", "Nice", ListingType::Villa, 400.0),
        ]
    }

    #[test]
    fn walks_the_happy_path_to_a_redirect() {
        let all = catalog();
        let mut bot = Assistant::new(&all);

        let greeting = bot.greeting();
        assert_eq!(greeting.suggestions, vec!["Nice", "Paris"]);

        let after_city = bot.respond("somewhere in paris please");
        assert!(after_city.text.contains("Paris"));
        assert_eq!(after_city.suggestions.len(), ListingType::ALL.len());

        let after_kind = bot.respond("an apartment");
        assert!(after_kind.text.contains("budget"));

        let done = bot.respond("about €200 a night");
        assert_eq!(done.results.len(), 1);
        assert_eq!(done.results[0].id, "1");

        let redirect = done.redirect.unwrap();
        assert_eq!(redirect.query.as_deref(), Some("Paris"));
        assert_eq!(redirect.kind, Some(ListingType::Apartment));
        assert_eq!(redirect.max_price, Some(200));
    }

    #[test]
    fn reprompts_on_unrecognized_city() {
        let all = catalog();
        let mut bot = Assistant::new(&all);
        let reply = bot.respond("the moon");
        assert!(reply.redirect.is_none());
        assert_eq!(reply.suggestions, vec!["Nice", "Paris"]);

        // Still on the city question.
        let reply = bot.respond("nice");
        assert!(reply.text.contains("Nice"));
    }

    #[test]
    fn empty_result_offers_a_restart() {
        let all = catalog();
        let mut bot = Assistant::new(&all);
        bot.respond("nice");
        bot.respond("villa");
        let reply = bot.respond("50");
        assert!(reply.results.is_empty());
        assert!(reply.redirect.is_none());
        assert_eq!(reply.suggestions, vec![RESTART_SUGGESTION]);
    }

    #[test]
    fn restart_suggestion_resets_from_any_stage() {
        let all = catalog();
        let mut bot = Assistant::new(&all);
        bot.respond("paris");
        let reply = bot.respond("Start over");
        assert!(reply.text.contains("Which city"));

        let reply = bot.respond("paris");
        assert!(reply.text.contains("Paris"));
    }

    #[test]
    fn budget_is_the_first_number_in_the_message() {
        assert_eq!(first_number("€500"), Some(500));
        assert_eq!(first_number("say 120 or so"), Some(120));
        assert_eq!(first_number("no digits here"), None);
    }
}
