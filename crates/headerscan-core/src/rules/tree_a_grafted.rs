//! Tree-A-Grafted: Tree-A with extra subtrees grafted onto several of its
//! leaves. Kept as a complete, separate structure so that edits to one tree
//! cannot change the other.

use super::DecisionTree;

pub static TREE_A_GRAFTED: DecisionTree = DecisionTree {
    name: "tree-a-grafted",
    root: tree! {
        if DebugSize <= 0 {
            if ExportSize <= 211 {
                if ImageVersion <= 520 {
                    if VirtualSize2 <= 130 {
                        if VirtualSize2 <= 5 {
                            if ResourceSize <= 37520 {
                                dirty
                            } else {
                                if NumberOfSections <= 2 {
                                    if IatRva <= 2048 {
                                        if ExportSize <= 67.5 {
                                            clean
                                        } else {
                                            dirty
                                        }
                                    } else {
                                        dirty
                                    }
                                } else {
                                    dirty
                                }
                            }
                        } else {
                            if VirtualSize2 <= 12 {
                                if NumberOfSections <= 3 {
                                    clean
                                } else {
                                    dirty
                                }
                            } else {
                                dirty
                            }
                        }
                    } else {
                        dirty
                    }
                } else {
                    if ResourceSize <= 0 {
                        if ImageVersion <= 1000 {
                            if NumberOfSections <= 4 {
                                dirty
                            } else {
                                if ExportSize <= 74 {
                                    if VirtualSize2 <= 1556 {
                                        dirty
                                    } else {
                                        if IatRva <= 5440 {
                                            if VirtualSize2 <= 126474 {
                                                if ExportSize <= 24 {
                                                    clean
                                                } else {
                                                    dirty
                                                }
                                            } else {
                                                dirty
                                            }
                                        } else {
                                            dirty
                                        }
                                    }
                                } else {
                                    clean
                                }
                            }
                        } else {
                            dirty
                        }
                    } else {
                        if NumberOfSections <= 2 {
                            if ImageVersion <= 3420 {
                                dirty
                            } else {
                                clean
                            }
                        } else {
                            dirty
                        }
                    }
                }
            } else {
                if ImageVersion <= 0 {
                    if ExportSize <= 23330 {
                        if IatRva <= 98304 {
                            if NumberOfSections <= 3 {
                                dirty
                            } else {
                                if IatRva <= 53872 {
                                    if VirtualSize2 <= 17.5 {
                                        dirty
                                    } else {
                                        if NumberOfSections <= 10.5 {
                                            if ResourceSize <= 3103192 {
                                                if ExportSize <= 10858.5 {
                                                    if VirtualSize2 <= 116016.5 {
                                                        clean
                                                    } else {
                                                        dirty
                                                    }
                                                } else {
                                                    clean
                                                }
                                            } else {
                                                dirty
                                            }
                                        } else {
                                            dirty
                                        }
                                    }
                                } else {
                                    if ExportSize <= 273 {
                                        dirty
                                    } else {
                                        if ResourceSize <= 1016 {
                                            dirty
                                        } else {
                                            clean
                                        }
                                    }
                                }
                            }
                        } else {
                            clean
                        }
                    } else {
                        dirty
                    }
                } else {
                    if ExportSize <= 1006718985 {
                        clean
                    } else {
                        dirty
                    }
                }
            }
        } else {
            if ResourceSize <= 545 {
                if ExportSize <= 92 {
                    if NumberOfSections <= 4 {
                        clean
                    } else {
                        if ImageVersion <= 6005 {
                            if ExportSize <= 6714 {
                                dirty
                            } else {
                                clean
                            }
                        } else {
                            clean
                        }
                    }
                } else {
                    clean
                }
            } else {
                if IatRva <= 94208 {
                    if NumberOfSections <= 5 {
                        if ExportSize <= 0 {
                            if NumberOfSections <= 4 {
                                if IatRva <= 13504 {
                                    if ImageVersion <= 353 {
                                        if NumberOfSections <= 3 {
                                            if IatRva <= 6144 {
                                                if IatRva <= 2048 {
                                                    if ResourceSize <= 934 {
                                                        dirty
                                                    } else {
                                                        if VirtualSize2 <= 2728 {
                                                            clean
                                                        } else {
                                                            dirty
                                                        }
                                                    }
                                                } else {
                                                    if VirtualSize2 <= 496 {
                                                        dirty
                                                    } else {
                                                        clean
                                                    }
                                                }
                                            } else {
                                                clean
                                            }
                                        } else {
                                            if DebugSize <= 41 {
                                                if ResourceSize <= 22720 {
                                                    if IatRva <= 2048 {
                                                        dirty
                                                    } else {
                                                        if VirtualSize2 <= 46 {
                                                            clean
                                                        } else {
                                                            dirty
                                                        }
                                                    }
                                                } else {
                                                    if VirtualSize2 <= 43030 {
                                                        if ResourceSize <= 3898348 {
                                                            if IatRva <= 2048 {
                                                                dirty
                                                            } else {
                                                                clean
                                                            }
                                                        } else {
                                                            dirty
                                                        }
                                                    } else {
                                                        clean
                                                    }
                                                }
                                            } else {
                                                clean
                                            }
                                        }
                                    } else {
                                        clean
                                    }
                                } else {
                                    if ResourceSize <= 35328 {
                                        if ImageVersion <= 4005 {
                                            if NumberOfSections <= 1.5 {
                                                dirty
                                            } else {
                                                clean
                                            }
                                        } else {
                                            clean
                                        }
                                    } else {
                                        if ImageVersion <= 5510 {
                                            if DebugSize <= 42 {
                                                if VirtualSize2 <= 144328 {
                                                    if NumberOfSections <= 3.5 {
                                                        clean
                                                    } else {
                                                        dirty
                                                    }
                                                } else {
                                                    clean
                                                }
                                            } else {
                                                clean
                                            }
                                        } else {
                                            clean
                                        }
                                    }
                                }
                            } else {
                                if IatRva <= 2048 {
                                    dirty
                                } else {
                                    clean
                                }
                            }
                        } else {
                            clean
                        }
                    } else {
                        if IatRva <= 1054 {
                            if ExportSize <= 218 {
                                if IatRva <= 704 {
                                    dirty
                                } else {
                                    if NumberOfSections <= 6 {
                                        dirty
                                    } else {
                                        clean
                                    }
                                }
                            } else {
                                if ExportSize <= 1006699445 {
                                    if ImageVersion <= 5510 {
                                        if ImageVersion <= 500 {
                                            dirty
                                        } else {
                                            clean
                                        }
                                    } else {
                                        clean
                                    }
                                } else {
                                    dirty
                                }
                            }
                        } else {
                            clean
                        }
                    }
                } else {
                    if ExportSize <= 0 {
                        if VirtualSize2 <= 78800 {
                            if NumberOfSections <= 4 {
                                clean
                            } else {
                                if ImageVersion <= 2340 {
                                    if ResourceSize <= 7328 {
                                        dirty
                                    } else {
                                        if VirtualSize2 <= 8288.5 {
                                            dirty
                                        } else {
                                            if NumberOfSections <= 6.5 {
                                                clean
                                            } else {
                                                dirty
                                            }
                                        }
                                    }
                                } else {
                                    clean
                                }
                            }
                        } else {
                            if ImageVersion <= 5515 {
                                dirty
                            } else {
                                clean
                            }
                        }
                    } else {
                        if IatRva <= 106496 {
                            if ResourceSize <= 2800 {
                                clean
                            } else {
                                if ImageVersion <= 500 {
                                    if ResourceSize <= 5360 {
                                        if NumberOfSections <= 4.5 {
                                            clean
                                        } else {
                                            if VirtualSize2 <= 22564.5 {
                                                if ExportSize <= 191.5 {
                                                    if DebugSize <= 42 {
                                                        if ExportSize <= 162.5 {
                                                            clean
                                                        } else {
                                                            if VirtualSize2 <= 10682 {
                                                                clean
                                                            } else {
                                                                if ResourceSize <= 3412 {
                                                                    clean
                                                                } else {
                                                                    dirty
                                                                }
                                                            }
                                                        }
                                                    } else {
                                                        clean
                                                    }
                                                } else {
                                                    clean
                                                }
                                            } else {
                                                clean
                                            }
                                        }
                                    } else {
                                        clean
                                    }
                                } else {
                                    clean
                                }
                            }
                        } else {
                            clean
                        }
                    }
                }
            }
        }
    },
};
