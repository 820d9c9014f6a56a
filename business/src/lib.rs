pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_detail;
        pub mod search;
    }
    pub mod user {
        pub mod get_age;
        pub mod get_user;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_detail;
            pub mod search;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_age;
            pub mod get_user;
        }
    }
}
