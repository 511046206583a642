pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod cache_store;
        pub mod cache_versions;
    }
}

pub mod modules {
    pub mod projects {
        pub mod core {
            pub mod project;
            pub mod projections;
            pub mod status;
            pub mod task;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod ownership;
            pub mod reconcile_project_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_project_summaries {
                pub mod cache_key;
                pub mod handler;
                pub mod read_model_cache;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod show_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod show_project {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_tasks {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_projects {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod manage_tasks {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod project_store;
                pub mod project_store_in_memory;
            }
        }
    }
}

pub mod shell;
