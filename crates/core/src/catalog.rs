// Static tool catalog: one row per PropertyData endpoint
//
// Descriptor and endpoint path share a row, so a tool cannot be advertised
// without a binding or bound without being advertised.

use crate::types::ParamKind::{Boolean, Integer, Number, String as Text};
use crate::types::{ParamSpec, ToolDescriptor};

const POSTCODE_HELP: &str = "UK postcode, full (e.g. \"W14 9JH\") or district (e.g. \"W14\")";

const POSTCODE: ParamSpec = ParamSpec::required("postcode", Text, POSTCODE_HELP);
const BEDROOMS: ParamSpec =
    ParamSpec::optional("bedrooms", Integer, "Number of bedrooms to filter on (0-5)");
const POINTS: ParamSpec = ParamSpec::optional(
    "points",
    Integer,
    "Number of data points to base the result on (default 20)",
);
const MAX_AGE: ParamSpec = ParamSpec::optional(
    "max_age",
    Integer,
    "Maximum age of sales to include, in months",
);
const UPRN: ParamSpec =
    ParamSpec::required("uprn", Text, "Unique Property Reference Number");

const POSTCODE_ONLY: &[ParamSpec] = &[POSTCODE];

const VALUATION_PARAMS: &[ParamSpec] = &[
    POSTCODE,
    ParamSpec::required("internal_area", Number, "Internal area in square feet"),
    ParamSpec::required(
        "property_type",
        Text,
        "One of flat, terraced_house, semi-detached_house, detached_house",
    ),
    ParamSpec::required(
        "construction_date",
        Text,
        "One of pre_1914, 1914_2000, 2000_onwards",
    ),
    ParamSpec::required("bedrooms", Integer, "Number of bedrooms (0-5)"),
    ParamSpec::required("bathrooms", Integer, "Number of bathrooms (1-5)"),
    ParamSpec::required(
        "finish_quality",
        Text,
        "One of unmodernised, below_average, average, high, very_high",
    ),
    ParamSpec::required(
        "outdoor_space",
        Text,
        "One of none, balcony_terrace, garden, garden_very_large",
    ),
    ParamSpec::required(
        "off_street_parking",
        Integer,
        "Number of off-street parking spaces (0-3)",
    ),
];

const fn tool(
    name: &'static str,
    path: &'static str,
    description: &'static str,
    params: &'static [ParamSpec],
) -> ToolDescriptor {
    ToolDescriptor {
        name,
        description,
        path,
        params,
    }
}

static CATALOG: &[ToolDescriptor] = &[
    // Sales market
    tool(
        "get_prices",
        "/prices",
        "Asking prices for properties currently on the market around a postcode",
        &[POSTCODE, BEDROOMS, POINTS],
    ),
    tool(
        "get_prices_per_sqf",
        "/prices-per-sqf",
        "Asking prices per square foot for properties on the market around a postcode",
        &[POSTCODE, POINTS],
    ),
    tool(
        "get_sold_prices",
        "/sold-prices",
        "Land Registry sold prices around a postcode",
        &[
            POSTCODE,
            ParamSpec::optional(
                "type",
                Text,
                "Property type: flat, terraced_house, semi-detached_house or detached_house",
            ),
            MAX_AGE,
            POINTS,
        ],
    ),
    tool(
        "get_sold_prices_per_sqf",
        "/sold-prices-per-sqf",
        "Sold prices per square foot around a postcode",
        &[POSTCODE, MAX_AGE, POINTS],
    ),
    tool(
        "get_growth",
        "/growth",
        "Historical capital growth of average prices in a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_growth_psf",
        "/growth-psf",
        "Historical growth of average price per square foot in a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_postcode_key_stats",
        "/postcode-key-stats",
        "Key statistics (average price, yield, growth) for every district in a region",
        &[ParamSpec::required(
            "region",
            Text,
            "Postcode area or region, e.g. \"SW\" or \"London\"",
        )],
    ),
    tool(
        "get_demand",
        "/demand",
        "Sales demand indicators (months of inventory, days on market) for a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_affordability",
        "/affordability",
        "House price to earnings affordability ratio for a postcode",
        POSTCODE_ONLY,
    ),
    // Rental market
    tool(
        "get_rents",
        "/rents",
        "Asking rents for properties currently on the rental market around a postcode",
        &[
            POSTCODE,
            BEDROOMS,
            ParamSpec::optional("type", Text, "Rental type: long_let or short_let"),
            POINTS,
        ],
    ),
    tool(
        "get_rents_hmo",
        "/rents-hmo",
        "Room rents in houses in multiple occupation around a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_yields",
        "/yields",
        "Gross rental yields around a postcode",
        &[POSTCODE, BEDROOMS],
    ),
    tool(
        "get_demand_rent",
        "/demand-rent",
        "Rental demand indicators for a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_lha_rate",
        "/lha-rate",
        "Local Housing Allowance rates for the broad rental market area of a postcode",
        &[POSTCODE, BEDROOMS],
    ),
    // Valuations
    tool(
        "get_valuation_sale",
        "/valuation-sale",
        "Estimated sale value of a residential property",
        VALUATION_PARAMS,
    ),
    tool(
        "get_valuation_rent",
        "/valuation-rent",
        "Estimated monthly rent of a residential property",
        VALUATION_PARAMS,
    ),
    tool(
        "get_valuation_historical",
        "/valuation-historical",
        "Estimated historical sale values of a residential property",
        VALUATION_PARAMS,
    ),
    tool(
        "get_valuation_hmo",
        "/valuation-hmo",
        "Estimated room rents for a house in multiple occupation",
        &[
            POSTCODE,
            ParamSpec::required("internal_area", Number, "Internal area in square feet"),
            ParamSpec::required("bedrooms", Integer, "Number of letting rooms"),
            ParamSpec::required("bathrooms", Integer, "Number of bathrooms"),
            ParamSpec::required(
                "finish_quality",
                Text,
                "One of unmodernised, below_average, average, high, very_high",
            ),
        ],
    ),
    tool(
        "get_build_cost",
        "/build-cost",
        "Construction cost per square foot for new builds in a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "stamp_duty_calculator",
        "/stamp-duty-calculator",
        "Stamp Duty Land Tax payable on a residential purchase",
        &[
            ParamSpec::required("property_value", Number, "Purchase price in pounds"),
            ParamSpec::optional(
                "first_time_buyer",
                Boolean,
                "Whether the buyer qualifies for first-time buyer relief",
            ),
        ],
    ),
    // Sourced properties
    tool(
        "get_sourced_properties",
        "/sourced-properties",
        "Properties sourced from the market matching a deal list",
        &[
            ParamSpec::required(
                "list",
                Text,
                "Deal list, e.g. repossessed-properties, cash-buyers-only, quick-sale",
            ),
            ParamSpec::optional("postcode", Text, POSTCODE_HELP),
            ParamSpec::optional("radius", Number, "Search radius in miles"),
            ParamSpec::optional("results", Integer, "Maximum number of results"),
        ],
    ),
    tool(
        "get_sourced_property",
        "/sourced-property",
        "Full details of a single sourced property",
        &[ParamSpec::required(
            "property_id",
            Text,
            "Identifier returned by get_sourced_properties",
        )],
    ),
    // Planning and land
    tool(
        "get_planning_applications",
        "/planning-applications",
        "Recent planning applications near a postcode",
        &[
            POSTCODE,
            ParamSpec::optional(
                "decision_rating",
                Text,
                "Filter by decision: positive, neutral or negative",
            ),
            ParamSpec::optional(
                "category",
                Text,
                "Filter by category, e.g. EXTENSION, CHANGE OF USE, NEW BUILD",
            ),
            ParamSpec::optional(
                "max_age_decision",
                Integer,
                "Maximum age of the decision, in days",
            ),
            ParamSpec::optional("results", Integer, "Maximum number of results"),
        ],
    ),
    tool(
        "get_listed_buildings",
        "/listed-buildings",
        "Listed buildings near a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_conservation_area",
        "/conservation-area",
        "Whether a postcode falls within a conservation area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_green_belt",
        "/green-belt",
        "Whether a postcode falls within green belt land",
        POSTCODE_ONLY,
    ),
    tool(
        "get_aonb",
        "/aonb",
        "Whether a postcode falls within an Area of Outstanding Natural Beauty",
        POSTCODE_ONLY,
    ),
    tool(
        "get_national_park",
        "/national-park",
        "Whether a postcode falls within a national park",
        POSTCODE_ONLY,
    ),
    tool(
        "get_flood_risk",
        "/flood-risk",
        "Flood risk rating for a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_freeholds",
        "/freeholds",
        "Freehold titles registered around a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_title",
        "/title",
        "Land Registry details for a title number",
        &[ParamSpec::required("title", Text, "Land Registry title number")],
    ),
    tool(
        "get_national_hmo_register",
        "/national-hmo-register",
        "Licensed houses in multiple occupation near a postcode",
        POSTCODE_ONLY,
    ),
    // Property identifiers
    tool(
        "get_uprns",
        "/uprns",
        "UPRNs and addresses for every property in a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_uprn",
        "/uprn",
        "Address and location details for a UPRN",
        &[UPRN],
    ),
    tool(
        "get_uprn_title",
        "/uprn-title",
        "Land Registry title numbers associated with a UPRN",
        &[UPRN],
    ),
    tool(
        "get_address_match_uprn",
        "/address-match-uprn",
        "Match a free-text address to a UPRN",
        &[
            ParamSpec::required("address", Text, "First line of the address"),
            POSTCODE,
        ],
    ),
    tool(
        "get_analyse_buildings",
        "/analyse-buildings",
        "Building footprint, height and floor analysis for a UPRN",
        &[UPRN],
    ),
    tool(
        "get_energy_efficiency",
        "/energy-efficiency",
        "EPC energy efficiency ratings of properties in a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_floor_areas",
        "/floor-areas",
        "EPC floor areas of properties in a postcode",
        POSTCODE_ONLY,
    ),
    // Area data
    tool(
        "get_council_tax",
        "/council-tax",
        "Council tax bands and charges for a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_crime",
        "/crime",
        "Recorded crime levels around a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_schools",
        "/schools",
        "Schools near a postcode with Ofsted ratings",
        POSTCODE_ONLY,
    ),
    tool(
        "get_internet_speed",
        "/internet-speed",
        "Broadband speeds available in a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_politics",
        "/politics",
        "Constituency, MP and recent election results for a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_population",
        "/population",
        "Population and density statistics for a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_demographics",
        "/demographics",
        "Census demographics (age, ethnicity, occupation) for a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_household_income",
        "/household-income",
        "Average household income for a postcode area",
        POSTCODE_ONLY,
    ),
    tool(
        "get_tenure_types",
        "/tenure-types",
        "Breakdown of owner-occupied, private rented and social housing",
        POSTCODE_ONLY,
    ),
    tool(
        "get_property_types",
        "/property-types",
        "Breakdown of detached, semi-detached, terraced and flat housing stock",
        POSTCODE_ONLY,
    ),
    tool(
        "get_area_type",
        "/area-type",
        "Urban or rural classification of a postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_ptal",
        "/ptal",
        "Public Transport Accessibility Level of a London postcode",
        POSTCODE_ONLY,
    ),
    tool(
        "get_restaurants",
        "/restaurants",
        "Restaurants near a postcode with hygiene ratings",
        POSTCODE_ONLY,
    ),
    tool(
        "get_agents",
        "/agents",
        "Estate agents active around a postcode with their market share",
        POSTCODE_ONLY,
    ),
];

/// Every tool the server advertises, in a fixed order
pub fn catalog() -> &'static [ToolDescriptor] {
    CATALOG
}

/// Look a tool up by name
pub fn find(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|tool| tool.name == name)
}
