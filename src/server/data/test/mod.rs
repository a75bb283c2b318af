mod global_settings;
