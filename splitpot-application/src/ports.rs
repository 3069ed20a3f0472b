use splitpot_domain::{Person, PersonId};
use std::collections::HashMap;

/// Resolves a participant id to a display name.
///
/// Settlement data is keyed by id throughout; only presentation asks for
/// names, through this seam, so two people sharing a name can never merge
/// into one ledger entry.
pub trait PersonDirectory {
    fn display_name(&self, id: PersonId) -> Option<&str>;
}

impl PersonDirectory for HashMap<PersonId, String> {
    fn display_name(&self, id: PersonId) -> Option<&str> {
        self.get(&id).map(String::as_str)
    }
}

/// Builds the directory the presenters consume from the event's people.
pub fn directory_from_people(people: &[Person]) -> HashMap<PersonId, String> {
    people
        .iter()
        .map(|person| (person.id, person.name.clone()))
        .collect()
}
