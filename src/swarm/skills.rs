//! Skill frequency ranking across the visible developers.

use std::collections::HashMap;

use crate::roster::Developer;

/// The most common skills across `developers`, most frequent first.
///
/// Skills are compared as exact strings. Equal counts keep the order in
/// which the skill was first seen when walking each developer's list in
/// turn. At most `limit` names are returned.
pub fn top_skills(developers: &[Developer], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for skill in developers.iter().flat_map(|d| d.skills.iter()) {
        match index.get(skill.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(skill.as_str(), counts.len());
                counts.push((skill.as_str(), 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(skill, _)| skill.to_string())
        .collect()
}
