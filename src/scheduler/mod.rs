pub mod cooldown_cleanup;
