mod profile_fetch;
