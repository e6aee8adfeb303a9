pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod flat_file;
    }
}

pub mod modules {
    pub mod feedback {
        pub mod core {
            pub mod access;
            pub mod colleagues;
            pub mod entry;
            pub mod ports;
            pub mod service_mode;
            pub mod store;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod submit_feedback {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_feedback {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_feedback {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_feedback {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_colleagues {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod csv_file;
                pub mod in_memory;
            }
        }
    }
}

pub mod shell;
