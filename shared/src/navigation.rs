use crate::dto::user::UserRole;

/// Sidebar icon, rendered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Calendar,
    Inbox,
    Chart,
    Trophy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

const ORGANIZER_NAV: [NavItem; 5] = [
    NavItem { name: "Dashboard", href: "/dashboard", icon: NavIcon::Home },
    NavItem { name: "My Events", href: "/dashboard/organizer/events", icon: NavIcon::Calendar },
    NavItem { name: "Create Event", href: "/dashboard/organizer/events/new", icon: NavIcon::Inbox },
    NavItem { name: "Analytics", href: "/dashboard/organizer/analytics", icon: NavIcon::Chart },
    NavItem { name: "Score Management", href: "/dashboard/organizer/subevents", icon: NavIcon::Trophy },
];

const STUDENT_NAV: [NavItem; 3] = [
    NavItem { name: "Dashboard", href: "/dashboard", icon: NavIcon::Home },
    NavItem { name: "Discover Events", href: "/dashboard/events", icon: NavIcon::Calendar },
    NavItem { name: "My Registrations", href: "/dashboard/student/registrations", icon: NavIcon::Inbox },
];

pub fn nav_items(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Organizer => &ORGANIZER_NAV,
        UserRole::Student => &STUDENT_NAV,
    }
}

/// Exact match, or `pathname` lies below `href`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    pathname == href
        || pathname
            .strip_prefix(href)
            .map_or(false, |rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn items_per_role() {
        let names = |role| nav_items(role).iter().map(|i| i.name).collect::<Vec<_>>();
        assert_eq!(
            names(UserRole::Organizer),
            vec!["Dashboard", "My Events", "Create Event", "Analytics", "Score Management"]
        );
        assert_eq!(
            names(UserRole::Student),
            vec!["Dashboard", "Discover Events", "My Registrations"]
        );
    }

    #[test_case("/dashboard", "/dashboard", true ; "exact")]
    #[test_case("/dashboard/organizer/events", "/dashboard/organizer/events/e1/edit", true ; "nested")]
    #[test_case("/dashboard/events", "/dashboard/eventsx", false ; "sibling prefix")]
    #[test_case("/dashboard/organizer/analytics", "/dashboard", false ; "parent")]
    fn active_matching(href: &str, pathname: &str, expected: bool) {
        assert_eq!(is_active(href, pathname), expected);
    }
}
