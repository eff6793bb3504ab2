//! Template consistency checks.
//!
//! Validation never blocks editing; the UI shows the issue list in the
//! status bar and the CLI turns errors into a failing exit code.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Template, ZoneKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single problem found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// Location in the document, e.g. `connections[2].to`
    pub path: String,
    pub message: String,
}

impl Issue {
    fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

/// Count of (errors, warnings)
pub fn tally(issues: &[Issue]) -> (usize, usize) {
    let errors = issues.iter().filter(|i| i.is_error()).count();
    (errors, issues.len() - errors)
}

/// Check a template for broken references and suspicious values
pub fn validate(template: &Template) -> Vec<Issue> {
    let mut issues = Vec::new();

    if template.name.trim().is_empty() {
        issues.push(Issue::warning("name", "template has no name"));
    }
    if let (Some(min), Some(max)) = (template.min_players, template.max_players) {
        if min > max {
            issues.push(Issue::error(
                "minPlayers",
                format!("minimum players ({}) exceeds maximum ({})", min, max),
            ));
        }
    }

    let mut seen = HashSet::new();
    for (i, zone) in template.zones.iter().enumerate() {
        if zone.id.trim().is_empty() {
            issues.push(Issue::error(format!("zones[{}].id", i), "zone id is empty"));
        } else if !seen.insert(zone.id.as_str()) {
            issues.push(Issue::error(
                format!("zones[{}].id", i),
                format!("duplicate zone id '{}'", zone.id),
            ));
        }
    }

    if !template.zones.is_empty() && !template.zones.iter().any(|z| z.kind == ZoneKind::Start) {
        issues.push(Issue::warning("zones", "no player start zone"));
    }

    for (i, conn) in template.connections.iter().enumerate() {
        if !seen.contains(conn.from.as_str()) {
            issues.push(Issue::error(
                format!("connections[{}].from", i),
                format!("unknown zone '{}'", conn.from),
            ));
        }
        if !seen.contains(conn.to.as_str()) {
            issues.push(Issue::error(
                format!("connections[{}].to", i),
                format!("unknown zone '{}'", conn.to),
            ));
        }
        if conn.from == conn.to {
            issues.push(Issue::warning(
                format!("connections[{}]", i),
                format!("zone '{}' is connected to itself", conn.from),
            ));
        }
    }

    if template.zones.len() > 1 {
        for (i, zone) in template.zones.iter().enumerate() {
            if template.degree(&zone.id) == 0 {
                issues.push(Issue::warning(
                    format!("zones[{}]", i),
                    format!("zone '{}' has no connections", zone.id),
                ));
            }
        }
    }

    let mut shop_ids = HashSet::new();
    for (i, shop) in template.shops.iter().enumerate() {
        if !shop_ids.insert(shop.id.as_str()) {
            issues.push(Issue::error(
                format!("shops[{}].id", i),
                format!("duplicate shop id '{}'", shop.id),
            ));
        }
        if let Some(zone) = &shop.zone {
            if !seen.contains(zone.as_str()) {
                issues.push(Issue::error(
                    format!("shops[{}].zone", i),
                    format!("unknown zone '{}'", zone),
                ));
            }
        }
        if let Some(price) = shop.price_multiplier {
            if !price.is_finite() || price < 0.0 {
                issues.push(Issue::error(
                    format!("shops[{}].priceMultiplier", i),
                    format!("price multiplier must be a non-negative number, got {}", price),
                ));
            }
        }
    }

    for (name, value) in template.army_multipliers.entries() {
        if !value.is_finite() || value < 0.0 {
            issues.push(Issue::error(
                "armyMultipliers",
                format!("{} multiplier must be a non-negative number, got {}", name, value),
            ));
        }
    }

    let mut box_ids = HashSet::new();
    for (i, pandora) in template.pandora_boxes.iter().enumerate() {
        if !box_ids.insert(pandora.id.as_str()) {
            issues.push(Issue::error(
                format!("pandoraBoxes[{}].id", i),
                format!("duplicate pandora box id '{}'", pandora.id),
            ));
        }
        if let Some(zone) = &pandora.zone {
            if !seen.contains(zone.as_str()) {
                issues.push(Issue::error(
                    format!("pandoraBoxes[{}].zone", i),
                    format!("unknown zone '{}'", zone),
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, PandoraBox, Shop, Zone};

    #[test]
    fn starter_template_is_clean() {
        let issues = validate(&Template::starter("Ring", 4));
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn empty_template_only_warns_about_name() {
        let issues = validate(&Template::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].path, "name");
    }

    #[test]
    fn dangling_connection_is_an_error() {
        let t = Template::starter("Ring", 2).add_connection("zone-1", "ghost");
        let issues = validate(&t);
        assert!(issues
            .iter()
            .any(|i| i.is_error() && i.path == "connections[1].to"));
    }

    #[test]
    fn duplicate_zone_ids_are_reported() {
        let mut t = Template::starter("Ring", 2);
        t.zones.push(Zone::new("zone-1"));
        let issues = validate(&t);
        assert!(issues.iter().any(|i| i.message == "duplicate zone id 'zone-1'"));
    }

    #[test]
    fn self_loop_and_isolated_zone_warn() {
        let mut t = Template::starter("Ring", 2);
        t.zones.push(Zone::new("island"));
        t.connections.push(Connection::new("zone-1", "zone-1"));
        let issues = validate(&t);
        let (errors, warnings) = tally(&issues);
        assert_eq!(errors, 0);
        assert_eq!(warnings, 2);
    }

    #[test]
    fn bad_references_and_numbers_are_errors() {
        let mut t = Template::starter("Ring", 2);
        t.min_players = Some(4);
        t.max_players = Some(2);
        let mut shop = Shop::new("s");
        shop.zone = Some("nowhere".into());
        shop.price_multiplier = Some(-1.0);
        t.shops.push(shop.clone());
        t.shops.push(Shop::new("s"));
        t.army_multipliers.guards = Some(f64::NAN);
        let mut pandora = PandoraBox::new("p");
        pandora.zone = Some("nowhere".into());
        t.pandora_boxes.push(pandora);
        t.pandora_boxes.push(PandoraBox::new("p"));

        let issues = validate(&t);
        let (errors, _) = tally(&issues);
        assert_eq!(errors, 7, "{:#?}", issues);
    }

    #[test]
    fn issue_display() {
        let issue = Issue::error("zones[0].id", "zone id is empty");
        assert_eq!(issue.to_string(), "error: zones[0].id: zone id is empty");
    }
}
