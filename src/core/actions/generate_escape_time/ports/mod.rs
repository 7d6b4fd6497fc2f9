pub mod update_rule;
