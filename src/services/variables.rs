use crate::models::game::*;

/// Categories the user may pick: full-game, non-archived, regular categories before misc ones.
pub fn selectable_categories(categories: &[Category]) -> Vec<&Category> {
    let mut selectable: Vec<&Category> = categories
        .iter()
        .filter(|c| !c.archived && !c.is_per_level)
        .collect();
    selectable.sort_by_key(|c| (c.is_misc, c.pos));
    selectable
}

pub fn is_applicable(variable: &Variable, category_id: &str) -> bool {
    if variable.category_scope == CategoryScope::Single
        && variable.category_id.as_deref() != Some(category_id)
    {
        return false;
    }
    if !variable.is_subcategory {
        return false;
    }
    matches!(variable.level_scope, LevelScope::All | LevelScope::FullGame)
}

pub fn applicable_variables<'a>(variables: &'a [Variable], category_id: &str) -> Vec<&'a Variable> {
    let mut applicable: Vec<&Variable> = variables
        .iter()
        .filter(|v| is_applicable(v, category_id))
        .collect();
    applicable.sort_by_key(|v| v.pos);
    applicable
}

pub fn options_for<'a>(values: &'a [Value], variable: &Variable) -> Vec<&'a Value> {
    let default = variable.default_value.as_deref();
    let mut options: Vec<&Value> = values
        .iter()
        .filter(|v| v.variable_id == variable.id && !v.archived)
        .collect();
    // false sorts first, so the default wins regardless of position
    options.sort_by_key(|v| (Some(v.id.as_str()) != default, v.pos));
    options
}

pub fn default_option_index(options: &[&Value], variable: &Variable) -> Option<usize> {
    let default = variable.default_value.as_deref()?;
    options.iter().position(|v| v.id == default)
}
