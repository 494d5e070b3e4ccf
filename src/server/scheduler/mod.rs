pub mod cache_purge;
