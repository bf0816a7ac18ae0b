mod feedback_test;
