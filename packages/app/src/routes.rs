//! Route table.
//!
//! Every path the app can navigate to, with the role a route requires.
//! Routes without a role are public.

use api::Role;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    /// Neutral landing page; denied navigations end up here.
    Home,
    ClientHome,
    VendorHome,
    DriverHome,
    SearchRestaurants,
    RegisterRestaurant,
    VendorProducts,
    RestaurantDetail { id: String },
    Cart,
    Orders,
    Review { order_id: String },
    Favorites,
}

/// Static description of one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub required_role: Option<Role>,
}

const fn public(pattern: &'static str) -> RouteEntry {
    RouteEntry {
        pattern,
        required_role: None,
    }
}

const fn gated(pattern: &'static str, role: Role) -> RouteEntry {
    RouteEntry {
        pattern,
        required_role: Some(role),
    }
}

#[rustfmt::skip]
pub const ROUTE_TABLE: [RouteEntry; 15] = [
    public("/"),
    public("/login"),
    public("/register"),
    public("/home"),
    gated("/home-cliente", Role::Client),
    gated("/home-vendedor", Role::Vendor),
    gated("/home-repartidor", Role::Driver),
    gated("/buscar-restaurantes", Role::Client),
    gated("/registrar-restaurante", Role::Vendor),
    gated("/mis-productos", Role::Vendor),
    gated("/restaurante/:id", Role::Client),
    gated("/carrito", Role::Client),
    gated("/pedidos", Role::Client),
    gated("/calificar/:orderId", Role::Client),
    gated("/favoritos", Role::Client),
];

impl Route {
    /// Match a location against the table. Query strings, fragments and a
    /// trailing slash are ignored. Unknown paths yield `None`.
    pub fn parse(location: &str) -> Option<Self> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/" => Self::Root,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/home" => Self::Home,
            "/home-cliente" => Self::ClientHome,
            "/home-vendedor" => Self::VendorHome,
            "/home-repartidor" => Self::DriverHome,
            "/buscar-restaurantes" => Self::SearchRestaurants,
            "/registrar-restaurante" => Self::RegisterRestaurant,
            "/mis-productos" => Self::VendorProducts,
            "/carrito" => Self::Cart,
            "/pedidos" => Self::Orders,
            "/favoritos" => Self::Favorites,
            _ => {
                if let Some(id) = single_segment(path, "/restaurante/") {
                    Self::RestaurantDetail { id: id.to_string() }
                } else if let Some(order_id) = single_segment(path, "/calificar/") {
                    Self::Review {
                        order_id: order_id.to_string(),
                    }
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// The concrete path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::RestaurantDetail { id } => format!("/restaurante/{id}"),
            Self::Review { order_id } => format!("/calificar/{order_id}"),
            other => other.pattern().to_string(),
        }
    }

    pub fn entry(&self) -> RouteEntry {
        ROUTE_TABLE[self.index()]
    }

    pub fn pattern(&self) -> &'static str {
        self.entry().pattern
    }

    pub fn required_role(&self) -> Option<Role> {
        self.entry().required_role
    }

    /// Static redirect applied before the guard runs.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Root => Some(Self::Login),
            _ => None,
        }
    }

    /// Where a user with `role` lands after signing in.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Client => Self::ClientHome,
            Role::Vendor => Self::VendorHome,
            Role::Driver => Self::DriverHome,
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::Login => 1,
            Self::Register => 2,
            Self::Home => 3,
            Self::ClientHome => 4,
            Self::VendorHome => 5,
            Self::DriverHome => 6,
            Self::SearchRestaurants => 7,
            Self::RegisterRestaurant => 8,
            Self::VendorProducts => 9,
            Self::RestaurantDetail { .. } => 10,
            Self::Cart => 11,
            Self::Orders => 12,
            Self::Review { .. } => 13,
            Self::Favorites => 14,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn single_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    path.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}
