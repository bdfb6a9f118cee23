mod concrete_scenarios;
