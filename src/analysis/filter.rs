use crate::catalog::models::Hero;

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match against display name, role tags and
/// their English labels, attribute label and position label. A non-blank
/// query is matched as typed, surrounding whitespace included.
pub fn matches_query(hero: &Hero, query: &str) -> bool {
    if is_blank(query) {
        return true;
    }

    let needle = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    contains(&hero.localized_name)
        || hero
            .roles
            .iter()
            .any(|r| contains(r.tag()) || contains(r.label()))
        || contains(hero.primary_attr.label())
        || contains(hero.position.label())
}

/// Heroes not already on the team that match the query, in catalog order.
pub fn available_heroes<'a>(heroes: &'a [Hero], team: &[Hero], query: &str) -> Vec<&'a Hero> {
    heroes
        .iter()
        .filter(|hero| !team.iter().any(|member| member.is_same(hero)))
        .filter(|hero| matches_query(hero, query))
        .collect()
}
